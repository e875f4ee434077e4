use crate::modules::scheduling::adapters::inbound::repl::arguments::Arguments;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(state: &AppState, arguments: Arguments) -> Result<String, ApplicationError> {
    let command = CreateEvent::try_from(arguments)?;
    let event = state.create_event.handle(command).await?;
    Ok(format!(r#"Event "{}" has been created"#, event.name))
}
