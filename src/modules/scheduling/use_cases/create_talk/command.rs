use crate::modules::scheduling::adapters::inbound::repl::arguments::{ArgumentError, Arguments};
use crate::modules::scheduling::adapters::inbound::repl::registry::CommandName;
use crate::modules::scheduling::core::records::Talk;

pub const PARAMETERS: [&str; 5] = ["event_name", "name", "start_time", "end_time", "speaker_name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTalk {
    pub event_name: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub speaker_name: String,
}

impl CreateTalk {
    pub fn into_record(self) -> Talk {
        Talk {
            event_name: self.event_name,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            speaker_name: self.speaker_name,
        }
    }
}

impl TryFrom<Arguments> for CreateTalk {
    type Error = ArgumentError;

    fn try_from(arguments: Arguments) -> Result<Self, Self::Error> {
        let [event_name, name, start_time, end_time, speaker_name] =
            arguments.bind(&CommandName::CreateTalk.to_string(), PARAMETERS)?;
        Ok(Self {
            event_name,
            name,
            start_time,
            end_time,
            speaker_name,
        })
    }
}
