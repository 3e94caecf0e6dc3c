//! Install-key directory: issuance, owner lookup, revocation.
//!
//! The directory is the only state in the system. It maps opaque install
//! keys to `OwnerRecord`s through the `KvStore` port and enforces the
//! one-active-key-per-owner protocol in its issue/revoke operations (the
//! store itself knows nothing about owners).

use sessionping_types::error::StoreError;
use sessionping_types::key::{InstallKey, OwnerRecord};
use tracing::debug;

use crate::storage::KvStore;

/// A key together with the record it resolves to.
#[derive(Debug, Clone)]
pub struct IssuedKey {
    pub key: InstallKey,
    pub record: OwnerRecord,
}

/// Directory of owner <-> install-key bindings.
///
/// Generic over `S: KvStore` so sessionping-core never depends on a
/// concrete store implementation.
pub struct KeyDirectory<S: KvStore> {
    store: S,
}

impl<S: KvStore> KeyDirectory<S> {
    /// Create a directory over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Find the binding for a chat, if any.
    ///
    /// Linear scan over the full listing, first match wins. O(n) in the
    /// number of stored keys -- acceptable because the directory holds
    /// one key per active user. Deterministic over a stable snapshot.
    pub async fn find_by_owner(&self, chat_id: i64) -> Result<Option<IssuedKey>, StoreError> {
        let entries = self.store.list_all().await?;
        for (key, record) in entries {
            if record.chat_id == chat_id {
                return Ok(Some(IssuedKey {
                    key: InstallKey::from(key),
                    record,
                }));
            }
        }
        Ok(None)
    }

    /// Generate a fresh key, persist the binding, and return the key.
    pub async fn issue(
        &self,
        chat_id: i64,
        first_name: Option<&str>,
    ) -> Result<InstallKey, StoreError> {
        let key = InstallKey::generate();
        let record = OwnerRecord {
            chat_id,
            first_name: first_name.map(str::to_string),
        };
        self.store.put(key.as_str(), &record).await?;
        debug!(chat_id, "issued install key");
        Ok(key)
    }

    /// Delete the owner's current binding (if any), then issue a fresh key.
    ///
    /// Total: revoking when no key exists still yields a new resolvable
    /// key. Not transactional across store operations -- a crash between
    /// delete and issue leaves the owner keyless until the next /start
    /// or /revoke (at-least-once-eventually, not exactly-once).
    pub async fn revoke(
        &self,
        chat_id: i64,
        first_name: Option<&str>,
    ) -> Result<InstallKey, StoreError> {
        if let Some(existing) = self.find_by_owner(chat_id).await? {
            self.store.delete(existing.key.as_str()).await?;
            debug!(chat_id, "revoked install key");
        }
        self.issue(chat_id, first_name).await
    }

    /// Point lookup by key. O(1) against the store.
    pub async fn resolve(&self, key: &str) -> Result<Option<OwnerRecord>, StoreError> {
        self.store.get(key).await
    }

    /// Delete a binding by key. Idempotent.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryKvStore;

    #[tokio::test]
    async fn test_issue_then_resolve_returns_owner() {
        let directory = KeyDirectory::new(MemoryKvStore::new());

        let key = directory.issue(42, Some("Ada")).await.unwrap();

        let record = directory.resolve(key.as_str()).await.unwrap().unwrap();
        assert_eq!(record.chat_id, 42);
        assert_eq!(record.first_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_resolve_unknown_key_is_absent() {
        let directory = KeyDirectory::new(MemoryKvStore::new());
        let record = directory.resolve("never-issued").await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_find_by_owner() {
        let directory = KeyDirectory::new(MemoryKvStore::new());
        directory.issue(1, None).await.unwrap();
        let key = directory.issue(2, Some("Bea")).await.unwrap();

        let found = directory.find_by_owner(2).await.unwrap().unwrap();
        assert_eq!(found.key, key);
        assert_eq!(found.record.chat_id, 2);

        assert!(directory.find_by_owner(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke_invalidates_old_key() {
        let directory = KeyDirectory::new(MemoryKvStore::new());
        let old = directory.issue(42, None).await.unwrap();

        let new = directory.revoke(42, None).await.unwrap();

        assert_ne!(old, new);
        assert!(directory.resolve(old.as_str()).await.unwrap().is_none());
        assert!(directory.resolve(new.as_str()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_revoke_without_existing_key_still_issues() {
        let directory = KeyDirectory::new(MemoryKvStore::new());

        let key = directory.revoke(42, Some("Ada")).await.unwrap();

        let record = directory.resolve(key.as_str()).await.unwrap().unwrap();
        assert_eq!(record.chat_id, 42);
    }

    #[tokio::test]
    async fn test_revoke_keeps_one_key_per_owner() {
        let directory = KeyDirectory::new(MemoryKvStore::new());
        directory.issue(42, None).await.unwrap();
        directory.revoke(42, None).await.unwrap();
        directory.revoke(42, None).await.unwrap();

        let entries = directory.store.list_all().await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let directory = KeyDirectory::new(MemoryKvStore::new());
        let key = directory.issue(42, None).await.unwrap();

        directory.remove(key.as_str()).await.unwrap();
        directory.remove(key.as_str()).await.unwrap();

        assert!(directory.resolve(key.as_str()).await.unwrap().is_none());
    }
}
