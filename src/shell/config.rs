// Session configuration read from the environment.
//
// Variables
// - SCHEDULER_REFERENCE_DATE: YYYY-MM-DD date every time of day resolves on. Defaults to today.
// - RUST_LOG: tracing filter, read by the subscriber in main.

use crate::modules::scheduling::core::clock::ReferenceDate;
use chrono::NaiveDate;
use thiserror::Error;

pub const REFERENCE_DATE_VAR: &str = "SCHEDULER_REFERENCE_DATE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCHEDULER_REFERENCE_DATE must be a date like 2024-05-01, got \"{value}\"")]
    InvalidReferenceDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub reference: ReferenceDate,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let reference = match lookup(REFERENCE_DATE_VAR) {
            Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map(ReferenceDate::new)
                .map_err(|source| ConfigError::InvalidReferenceDate { value, source })?,
            None => ReferenceDate::today(),
        };
        Ok(Self { reference })
    }
}
