// Text layout of a scheduled talk:
//
//   9:00am – 10:00am
//     My Talk presented by John

use crate::modules::scheduling::use_cases::print_talks::handler::ScheduledTalk;

pub fn present(entry: &ScheduledTalk) -> String {
    format!(
        "{}\n  {} presented by {}",
        entry.schedule, entry.talk.name, entry.talk.speaker_name
    )
}

pub fn present_all(entries: &[ScheduledTalk]) -> String {
    entries.iter().map(present).collect::<Vec<_>>().join("\n")
}
