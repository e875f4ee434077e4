// Records managed by the scheduler: events, speakers and the talks linking them.
//
// Relationships are by name and are only checked when a talk is admitted.
// Records never change once stored.

use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::core::validate_talk::{TalkContext, validate_talk};
use crate::shared::infrastructure::record_store::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAttribute {
    Name,
}

impl Record for Event {
    const KIND: &'static str = "Event";
    type Attribute = EventAttribute;
    type Context = ();

    fn attribute(&self, attribute: EventAttribute) -> &str {
        match attribute {
            EventAttribute::Name => &self.name,
        }
    }

    fn violations(&self, _peers: &[Self], _context: &()) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
}

impl Speaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerAttribute {
    Name,
}

impl Record for Speaker {
    const KIND: &'static str = "Speaker";
    type Attribute = SpeakerAttribute;
    type Context = ();

    fn attribute(&self, attribute: SpeakerAttribute) -> &str {
        match attribute {
            SpeakerAttribute::Name => &self.name,
        }
    }

    fn violations(&self, _peers: &[Self], _context: &()) -> Vec<String> {
        Vec::new()
    }
}

/// A talk keeps its times as typed; they are resolved against a [`ReferenceDate`] when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub event_name: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub speaker_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkAttribute {
    EventName,
    Name,
    StartTime,
    EndTime,
    SpeakerName,
}

impl Talk {
    /// Both ends resolved, in whatever order the user typed them.
    pub fn schedule(&self, reference: &ReferenceDate) -> Option<Schedule> {
        let start = reference.parse(&self.start_time)?;
        let end = reference.parse(&self.end_time)?;
        Some(Schedule::new(start, end))
    }
}

impl Record for Talk {
    const KIND: &'static str = "Talk";
    type Attribute = TalkAttribute;
    type Context = TalkContext;

    fn attribute(&self, attribute: TalkAttribute) -> &str {
        match attribute {
            TalkAttribute::EventName => &self.event_name,
            TalkAttribute::Name => &self.name,
            TalkAttribute::StartTime => &self.start_time,
            TalkAttribute::EndTime => &self.end_time,
            TalkAttribute::SpeakerName => &self.speaker_name,
        }
    }

    fn violations(&self, peers: &[Self], context: &TalkContext) -> Vec<String> {
        validate_talk(self, peers, context)
    }
}
