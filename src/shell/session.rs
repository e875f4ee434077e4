// The command loop.
//
// Responsibilities
// - Show the help text, then read, dispatch and report one line at a time until EXIT or end of input.
// - Route outcomes: confirmations to info, user mistakes to error, wiring defects to fatal.
// - A fatal error ends the session. Everything else lets the loop carry on.

use crate::modules::scheduling::adapters::inbound::repl::documentation::DOCUMENTATION;
use crate::modules::scheduling::adapters::inbound::repl::registry::{CommandName, dispatch};
use crate::modules::scheduling::adapters::inbound::repl::tokenizer::tokenize;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::{create_event, create_speaker, create_talk, print_talks};
use crate::shared::infrastructure::console::{Console, LineReader};
use crate::shell::state::AppState;
use std::ops::ControlFlow;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session ended by a fatal error: {0}")]
    Fatal(String),

    #[error(transparent)]
    Input(#[from] anyhow::Error),
}

pub struct Session<TReader, TConsole>
where
    TReader: LineReader,
    TConsole: Console,
{
    state: AppState,
    reader: TReader,
    console: Arc<TConsole>,
}

impl<TReader, TConsole> Session<TReader, TConsole>
where
    TReader: LineReader,
    TConsole: Console,
{
    pub fn new(state: AppState, reader: TReader, console: Arc<TConsole>) -> Self {
        Self {
            state,
            reader,
            console,
        }
    }

    pub async fn run(&mut self) -> Result<(), SessionError> {
        tracing::info!("session started");
        self.console.info(DOCUMENTATION);

        while let Some(line) = self.reader.read_line().await? {
            if self.execute(&line).await?.is_break() {
                break;
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    async fn execute(&self, line: &str) -> Result<ControlFlow<()>, SessionError> {
        let Some(invocation) = dispatch(&tokenize(line)) else {
            tracing::debug!("no command recognised, showing help");
            self.console.info(DOCUMENTATION);
            return Ok(ControlFlow::Continue(()));
        };

        let command = invocation.command;
        let arguments = invocation.arguments;
        let outcome = match command {
            CommandName::Exit => return Ok(ControlFlow::Break(())),
            CommandName::CreateEvent => create_event::inbound::repl::handle(&self.state, arguments).await,
            CommandName::CreateSpeaker => {
                create_speaker::inbound::repl::handle(&self.state, arguments).await
            }
            CommandName::CreateTalk => create_talk::inbound::repl::handle(&self.state, arguments).await,
            CommandName::PrintTalks => print_talks::inbound::repl::handle(&self.state, arguments).await,
        };

        self.report(command, outcome)?;
        Ok(ControlFlow::Continue(()))
    }

    fn report(
        &self,
        command: CommandName,
        outcome: Result<String, ApplicationError>,
    ) -> Result<(), SessionError> {
        match outcome {
            Ok(message) => self.console.info(&message),
            Err(error) if error.is_fatal() => {
                tracing::error!(%command, %error, "command wiring defect");
                self.console.fatal(&error.to_string());
                return Err(SessionError::Fatal(error.to_string()));
            }
            Err(error) => {
                tracing::warn!(%command, %error, "command failed");
                self.console.error(&error.to_string());
            }
        }
        Ok(())
    }
}
