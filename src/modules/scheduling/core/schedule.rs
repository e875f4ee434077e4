// The time slot a talk occupies.

use chrono::NaiveDateTime;
use std::fmt;

const TIME_OF_DAY_FORMAT: &str = "%-I:%M%P";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Schedule {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// True when both slots share some stretch of time. Slots that only touch at a
    /// boundary, one ending exactly when the other starts, do not overlap.
    pub fn overlaps(&self, other: &Schedule) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {}",
            self.start.format(TIME_OF_DAY_FORMAT),
            self.end.format(TIME_OF_DAY_FORMAT)
        )
    }
}
