// Ports for the terminal the session talks to.
//
// Purpose
// - LineReader hands the session one raw line at a time.
// - Console receives normal output, recoverable errors and fatal errors.
//
// Boundaries
// - No formatting decisions here. Callers pass finished messages.
// - Ending the process after a fatal message is the caller's job; the sink only records it.

pub mod in_memory;
pub mod stdio;

use async_trait::async_trait;

#[async_trait]
pub trait LineReader: Send {
    /// Next line without its line terminator, or `None` once input is exhausted.
    async fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

pub trait Console: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn fatal(&self, message: &str);
}
