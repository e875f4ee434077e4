use crate::modules::scheduling::adapters::inbound::repl::arguments::{ArgumentError, Arguments};
use crate::modules::scheduling::adapters::inbound::repl::registry::CommandName;

pub const PARAMETERS: [&str; 1] = ["name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub name: String,
}

impl TryFrom<Arguments> for CreateEvent {
    type Error = ArgumentError;

    fn try_from(arguments: Arguments) -> Result<Self, Self::Error> {
        let [name] = arguments.bind(&CommandName::CreateEvent.to_string(), PARAMETERS)?;
        Ok(Self { name })
    }
}

#[cfg(test)]
mod create_event_command_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_command_from_its_arguments() {
        let arguments: Arguments = [("name", "an_event")].into_iter().collect();
        assert_eq!(
            CreateEvent::try_from(arguments),
            Ok(CreateEvent {
                name: "an_event".to_string()
            })
        );
    }

    #[rstest]
    fn it_should_require_a_name() {
        let error = CreateEvent::try_from(Arguments::new()).unwrap_err();
        assert_eq!(error.to_string(), "CreateEvent expects to receive arguments :name");
    }
}
