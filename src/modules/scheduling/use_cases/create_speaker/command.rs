use crate::modules::scheduling::adapters::inbound::repl::arguments::{ArgumentError, Arguments};
use crate::modules::scheduling::adapters::inbound::repl::registry::CommandName;

pub const PARAMETERS: [&str; 1] = ["name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpeaker {
    pub name: String,
}

impl TryFrom<Arguments> for CreateSpeaker {
    type Error = ArgumentError;

    fn try_from(arguments: Arguments) -> Result<Self, Self::Error> {
        let [name] = arguments.bind(&CommandName::CreateSpeaker.to_string(), PARAMETERS)?;
        Ok(Self { name })
    }
}
