//! Key-value store trait.
//!
//! Defines the typed interface over the external durable map that holds
//! key -> owner bindings. Implementations live in sessionping-infra.

use sessionping_types::error::StoreError;
use sessionping_types::key::OwnerRecord;

/// Trait for the durable install-key store.
///
/// Values are `OwnerRecord`s keyed by the opaque install key string.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Replication and durability are the store's concern, not this trait's.
pub trait KvStore: Send + Sync {
    /// Get a record by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<OwnerRecord>, StoreError>> + Send;

    /// Store a record under a key (upsert).
    fn put(
        &self,
        key: &str,
        record: &OwnerRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a key. No-op if the key does not exist.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// List every stored (key, record) pair.
    ///
    /// The directory stays small (one key per active user), so callers
    /// may scan the full listing.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<(String, OwnerRecord)>, StoreError>> + Send;
}
