use crate::modules::scheduling::adapters::inbound::repl::arguments::Arguments;
use crate::modules::scheduling::use_cases::create_talk::command::CreateTalk;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(state: &AppState, arguments: Arguments) -> Result<String, ApplicationError> {
    let command = CreateTalk::try_from(arguments)?;
    let talk = state.create_talk.handle(command).await?;
    Ok(format!(r#"Talk "{}" has been created"#, talk.name))
}
