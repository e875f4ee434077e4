// In memory console adapters.
//
// Purpose
// - Drive a session from a fixed script of lines and capture everything it reports.
//
// Responsibilities
// - ScriptedLineReader yields its lines in order, then signals end of input.
// - CapturedConsole keeps info, error and fatal messages apart for inspection.

use crate::shared::infrastructure::console::{Console, LineReader};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct ScriptedLineReader {
    lines: VecDeque<String>,
}

impl ScriptedLineReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl LineReader for ScriptedLineReader {
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Info(String),
    Error(String),
    Fatal(String),
}

#[derive(Default)]
pub struct CapturedConsole {
    outputs: Mutex<Vec<Output>>,
}

impl CapturedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<Output> {
        self.lock().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|output| match output {
                Output::Info(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|output| match output {
                Output::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fatals(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|output| match output {
                Output::Fatal(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, output: Output) {
        self.lock().push(output);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Output>> {
        // A poisoned capture still holds everything written before the panic.
        self.outputs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Console for CapturedConsole {
    fn info(&self, message: &str) {
        self.push(Output::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Output::Error(message.to_string()));
    }

    fn fatal(&self, message: &str) {
        self.push(Output::Fatal(message.to_string()));
    }
}
