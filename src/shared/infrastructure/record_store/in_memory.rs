// In memory implementation of the RecordStore port.
//
// Purpose
// - Hold the records of one kind for the lifetime of a session.
//
// Responsibilities
// - Validate and insert under a single write lock, so a rejected or half checked record is never observable.
// - Serve reads from a snapshot cloned under the read lock.

use crate::shared::infrastructure::record_store::{Record, RecordStore, StoreError, matching};
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn append(&self, record: R, context: &R::Context) -> Result<R, StoreError> {
        let mut guard = self.records.write().await;
        let messages = record.violations(&guard, context);
        if !messages.is_empty() {
            tracing::debug!(kind = R::KIND, violations = messages.len(), "record rejected");
            return Err(StoreError::InvalidRecord {
                kind: R::KIND,
                messages,
            });
        }
        guard.push(record.clone());
        tracing::debug!(kind = R::KIND, count = guard.len(), "record stored");
        Ok(record)
    }

    async fn all(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    async fn where_eq(&self, attribute: R::Attribute, value: &str) -> Vec<R> {
        let guard = self.records.read().await;
        matching(guard.as_slice(), attribute, value).cloned().collect()
    }

    async fn clear(&self) {
        self.records.write().await.clear();
        tracing::debug!(kind = R::KIND, "records cleared");
    }
}
