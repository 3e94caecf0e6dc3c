//! In-memory test doubles for the store and delivery ports.

use std::sync::Mutex;

use sessionping_types::error::StoreError;
use sessionping_types::key::OwnerRecord;

use crate::delivery::MessageSender;
use crate::storage::KvStore;

/// In-memory `KvStore` backed by a BTreeMap (stable listing order).
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<std::collections::BTreeMap<String, OwnerRecord>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<OwnerRecord>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, record: &OwnerRecord) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<(String, OwnerRecord)>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// `MessageSender` that records every send and reports a fixed outcome.
pub struct RecordingSender {
    pub sent: Mutex<Vec<(i64, String)>>,
    outcome: bool,
}

impl RecordingSender {
    /// Sender whose deliveries all succeed.
    pub fn new() -> Self {
        Self::with_outcome(true)
    }

    /// Sender whose deliveries all report `outcome`.
    pub fn with_outcome(outcome: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcome,
        }
    }

    pub fn messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageSender for RecordingSender {
    async fn send(&self, chat_id: i64, text: &str) -> bool {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        self.outcome
    }
}
