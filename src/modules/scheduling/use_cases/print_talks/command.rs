use crate::modules::scheduling::adapters::inbound::repl::arguments::{ArgumentError, Arguments};
use crate::modules::scheduling::adapters::inbound::repl::registry::CommandName;

pub const PARAMETERS: [&str; 1] = ["event_name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintTalks {
    pub event_name: String,
}

impl TryFrom<Arguments> for PrintTalks {
    type Error = ArgumentError;

    fn try_from(arguments: Arguments) -> Result<Self, Self::Error> {
        let [event_name] = arguments.bind(&CommandName::PrintTalks.to_string(), PARAMETERS)?;
        Ok(Self { event_name })
    }
}
