use crate::modules::scheduling::adapters::inbound::repl::arguments::Arguments;
use crate::modules::scheduling::use_cases::create_speaker::command::CreateSpeaker;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(state: &AppState, arguments: Arguments) -> Result<String, ApplicationError> {
    let command = CreateSpeaker::try_from(arguments)?;
    let speaker = state.create_speaker.handle(command).await?;
    Ok(format!(r#"Speaker "{}" has been created"#, speaker.name))
}
