// Record store port: an ordered, append only collection of one record kind.
//
// Purpose
// - Describe how records are admitted, read and cleared, without tying callers to a backend.
//
// Responsibilities
// - A record is admitted only if its own violations are empty. Rejections carry every message.
// - The store is typed by record, so a record of another kind cannot be appended.
//
// Boundaries
// - Reads return owned snapshots. Mutating a snapshot never touches the store.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

/// A record kind that can live in a [`RecordStore`].
pub trait Record: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Kind name used in rejection messages.
    const KIND: &'static str;

    /// Attributes that can be compared with [`RecordStore::where_eq`].
    type Attribute: Copy + std::fmt::Debug + Send + Sync + 'static;

    /// Read only views the admission check needs besides the peers in the same store.
    type Context: Send + Sync;

    fn attribute(&self, attribute: Self::Attribute) -> &str;

    /// Every reason this record may not be stored next to `peers`. Empty means admissible.
    fn violations(&self, peers: &[Self], context: &Self::Context) -> Vec<String>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Error: {kind} is not valid.\n{}", indent_messages(.messages))]
    InvalidRecord {
        kind: &'static str,
        messages: Vec<String>,
    },
}

fn indent_messages(messages: &[String]) -> String {
    messages
        .iter()
        .map(|message| format!("       {message}."))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Linear scan shared by every store and by validators working on snapshots.
pub fn matching<'a, R: Record>(
    records: &'a [R],
    attribute: R::Attribute,
    value: &'a str,
) -> impl Iterator<Item = &'a R> + 'a {
    records
        .iter()
        .filter(move |record| record.attribute(attribute) == value)
}

/// Appending a record of another kind is a wiring defect and does not compile:
///
/// ```compile_fail
/// use event_scheduler::modules::scheduling::core::records::{Event, Speaker};
/// use event_scheduler::shared::infrastructure::record_store::RecordStore;
/// use event_scheduler::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
///
/// async fn wrong_kind(events: &InMemoryRecordStore<Event>) {
///     let _ = events.append(Speaker::new("John"), &()).await;
/// }
/// ```
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn append(&self, record: R, context: &R::Context) -> Result<R, StoreError>;
    async fn all(&self) -> Vec<R>;
    async fn where_eq(&self, attribute: R::Attribute, value: &str) -> Vec<R>;
    async fn clear(&self);
}

#[cfg(test)]
mod record_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_render_every_violation_on_its_own_indented_line() {
        let error = StoreError::InvalidRecord {
            kind: "Talk",
            messages: vec![
                r#"Event "ev" does not exist"#.to_string(),
                r#"Speaker "John" does not exist"#.to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Error: Talk is not valid.\n       Event \"ev\" does not exist.\n       Speaker \"John\" does not exist."
        );
    }

    #[rstest]
    fn it_should_render_a_single_violation() {
        let error = StoreError::InvalidRecord {
            kind: "Talk",
            messages: vec!["The start time must preceed the end time".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Error: Talk is not valid.\n       The start time must preceed the end time."
        );
    }
}
