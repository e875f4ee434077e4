use crate::modules::scheduling::adapters::inbound::repl::arguments::Arguments;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::print_talks::command::PrintTalks;
use crate::modules::scheduling::use_cases::print_talks::presenter::present_all;
use crate::shell::state::AppState;

pub async fn handle(state: &AppState, arguments: Arguments) -> Result<String, ApplicationError> {
    let query = PrintTalks::try_from(arguments)?;
    let scheduled = state.print_talks.handle(query).await?;
    Ok(present_all(&scheduled))
}
