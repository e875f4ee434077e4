use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_scheduler::shared::infrastructure::console::stdio::{StdinLineReader, StdioConsole};
use event_scheduler::shell::config::SessionConfig;
use event_scheduler::shell::session::Session;
use event_scheduler::shell::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "scheduler stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SessionConfig::from_env()?;
    tracing::debug!(reference_date = %config.reference.date(), "configuration loaded");

    let state = AppState::in_memory(config.reference);
    let mut session = Session::new(state, StdinLineReader::stdin(), Arc::new(StdioConsole));
    session.run().await?;
    Ok(())
}
