use crate::modules::scheduling::adapters::inbound::repl::arguments::ArgumentError;
use crate::shared::infrastructure::record_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error(transparent)]
    InvalidRecord(#[from] StoreError),

    #[error(r#"There are no talks registered for "{event_name}""#)]
    NoTalks { event_name: String },
}

impl ApplicationError {
    /// Fatal errors reveal miswired code rather than a user mistake and end the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApplicationError::Arguments(ArgumentError::Unexpected { .. }))
    }
}
