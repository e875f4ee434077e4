// Shared test fixtures for talks.
//
// The default talk comes from json/create_talk.json: "My Talk" by John at an_event, 9:00am to 10:00am.

use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::records::{Event, Speaker, Talk};
use crate::modules::scheduling::core::validate_talk::TalkContext;
use crate::modules::scheduling::use_cases::create_talk::command::CreateTalk;
use chrono::NaiveDate;

const CREATE_TALK_JSON: &str = include_str!("json/create_talk.json");

pub fn reference_date() -> ReferenceDate {
    ReferenceDate::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
}

/// Knows the fixture event and speaker.
pub fn talk_context() -> TalkContext {
    TalkContext {
        events: vec![Event::new("an_event")],
        speakers: vec![Speaker::new("John")],
        reference: reference_date(),
    }
}

pub struct TalkBuilder {
    inner: Talk,
}

impl Default for TalkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TalkBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(CREATE_TALK_JSON).unwrap(),
        }
    }

    pub fn event_name(mut self, v: impl Into<String>) -> Self {
        self.inner.event_name = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = v.into();
        self
    }

    pub fn end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.end_time = v.into();
        self
    }

    pub fn speaker_name(mut self, v: impl Into<String>) -> Self {
        self.inner.speaker_name = v.into();
        self
    }

    pub fn build(self) -> Talk {
        self.inner
    }

    pub fn build_command(self) -> CreateTalk {
        CreateTalk {
            event_name: self.inner.event_name,
            name: self.inner.name,
            start_time: self.inner.start_time,
            end_time: self.inner.end_time,
            speaker_name: self.inner.speaker_name,
        }
    }
}

#[cfg(test)]
mod talk_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TalkBuilder::default().build();
        assert_eq!(built.event_name, "an_event");
        assert_eq!(built.name, "My Talk");
        assert_eq!(built.start_time, "9:00am");
        assert_eq!(built.end_time, "10:00am");
        assert_eq!(built.speaker_name, "John");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = TalkBuilder::new()
            .event_name("rustconf")
            .name("Ownership")
            .start_time("1:00pm")
            .end_time("2:00pm")
            .speaker_name("Ferris")
            .build_command();
        assert_eq!(
            custom,
            CreateTalk {
                event_name: "rustconf".to_string(),
                name: "Ownership".to_string(),
                start_time: "1:00pm".to_string(),
                end_time: "2:00pm".to_string(),
                speaker_name: "Ferris".to_string(),
            }
        );
    }
}
