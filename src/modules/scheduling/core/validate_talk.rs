// Admission rules for a talk.
//
// Purpose
// - Decide whether a candidate talk may join the talks already scheduled.
//
// Responsibilities
// - The event and the speaker must exist.
// - Both times must be understood and the start must come strictly before the end.
// - The talk must not overlap any talk already scheduled for the same event, whatever order they were entered in.
// - Report every broken rule, never only the first.
//
// Boundaries
// - Pure: reads the snapshots it is given and returns messages. No input or output.

use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::records::{
    Event, EventAttribute, Speaker, SpeakerAttribute, Talk, TalkAttribute,
};
use crate::modules::scheduling::core::schedule::Schedule;
use crate::shared::infrastructure::record_store::matching;

/// Read only views of the other stores, taken just before a talk is appended.
#[derive(Debug, Clone)]
pub struct TalkContext {
    pub events: Vec<Event>,
    pub speakers: Vec<Speaker>,
    pub reference: ReferenceDate,
}

pub fn validate_talk(talk: &Talk, peers: &[Talk], context: &TalkContext) -> Vec<String> {
    let mut violations = Vec::new();

    if matching(&context.events, EventAttribute::Name, &talk.event_name)
        .next()
        .is_none()
    {
        violations.push(format!(r#"Event "{}" does not exist"#, talk.event_name));
    }

    let start = parse_field(&context.reference, "start time", &talk.start_time, &mut violations);
    let end = parse_field(&context.reference, "end time", &talk.end_time, &mut violations);
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            let schedule = Schedule::new(start, end);
            for (other, other_schedule) in conflicts(talk, schedule, peers, &context.reference) {
                violations.push(format!(
                    "Talk overlaps with {} ({})",
                    other.name, other_schedule
                ));
            }
        } else {
            violations.push("The start time must preceed the end time".to_string());
        }
    }

    if matching(&context.speakers, SpeakerAttribute::Name, &talk.speaker_name)
        .next()
        .is_none()
    {
        violations.push(format!(r#"Speaker "{}" does not exist"#, talk.speaker_name));
    }

    violations
}

fn parse_field(
    reference: &ReferenceDate,
    field: &str,
    raw: &str,
    violations: &mut Vec<String>,
) -> Option<chrono::NaiveDateTime> {
    let parsed = reference.parse(raw);
    if parsed.is_none() {
        violations.push(format!(r#"Could not understand {field} "{raw}""#));
    }
    parsed
}

fn conflicts<'a>(
    talk: &'a Talk,
    schedule: Schedule,
    peers: &'a [Talk],
    reference: &'a ReferenceDate,
) -> impl Iterator<Item = (&'a Talk, Schedule)> + 'a {
    matching(peers, TalkAttribute::EventName, &talk.event_name)
        .filter_map(move |other| other.schedule(reference).map(|slot| (other, slot)))
        .filter(move |(_, slot)| slot.overlaps(&schedule))
}
