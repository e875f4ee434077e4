// Time of day parsing against a shared reference date.
//
// Purpose
// - Turn what a user types for a talk time ("9:00am", "21:30", ...) into an instant.
//
// Responsibilities
// - Resolve every time of day on the same reference date, so start and end of a talk,
//   and talks entered at different moments, compare consistently.
// - Reject anything that is not clearly a time ("1900", "soon").
// - Accept a full timestamp only when it falls on the reference date.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const TIME_FORMATS: [&str; 4] = ["%I:%M%p", "%I:%M:%S%p", "%H:%M", "%H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate(NaiveDate);

impl ReferenceDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let trimmed = raw.trim();
        if let Some(instant) = DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        {
            return (instant.date() == self.0).then_some(instant);
        }

        let normalized = with_minutes(&compact(trimmed));
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
            .map(|time| self.0.and_time(time))
    }
}

fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// "9am" -> "9:00am"
fn with_minutes(time: &str) -> String {
    let Some(hour) = time
        .strip_suffix("am")
        .or_else(|| time.strip_suffix("pm"))
    else {
        return time.to_string();
    };
    if hour.is_empty() || !hour.chars().all(|c| c.is_ascii_digit()) {
        return time.to_string();
    }
    format!("{hour}:00{}", &time[hour.len()..])
}
