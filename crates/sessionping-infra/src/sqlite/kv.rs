//! SQLite install-key store implementation.
//!
//! Implements `KvStore` from `sessionping-core` using sqlx with split
//! read/write pools. Owner records are stored as JSON text and
//! deserialized on read.

use chrono::Utc;
use sessionping_core::storage::KvStore;
use sessionping_types::error::StoreError;
use sessionping_types::key::OwnerRecord;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn decode_record(value: &str) -> Result<OwnerRecord, StoreError> {
    serde_json::from_str(value)
        .map_err(|e| StoreError::Query(format!("invalid JSON value: {e}")))
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<OwnerRecord>, StoreError> {
        let row = sqlx::query("SELECT value FROM install_keys WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(Some(decode_record(&value)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, record: &OwnerRecord) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        let value = serde_json::to_string(record)
            .map_err(|e| StoreError::Query(format!("failed to serialize record: {e}")))?;

        sqlx::query(
            r#"INSERT INTO install_keys (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(&value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM install_keys WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<(String, OwnerRecord)>, StoreError> {
        let rows = sqlx::query("SELECT key, value FROM install_keys ORDER BY key")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let key: String = row
                .try_get("key")
                .map_err(|e| StoreError::Query(e.to_string()))?;
            let value: String = row
                .try_get("value")
                .map_err(|e| StoreError::Query(e.to_string()))?;
            entries.push((key, decode_record(&value)?));
        }

        Ok(entries)
    }
}
