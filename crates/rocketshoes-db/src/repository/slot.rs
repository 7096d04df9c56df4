//! # Storage Slot Repository
//!
//! Database operations for `storage_slots`: one string value per key.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartManager commit                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SlotStorage::set("@RocketShoes:cart", "[...]")                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT ... ON CONFLICT(key) DO UPDATE   (full overwrite, one row)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use rocketshoes_core::{SlotStorage, StorageResult};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for storage slot operations.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads a slot value.
    pub async fn fetch(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Fetching storage slot");

        let value = sqlx::query_scalar::<_, String>("SELECT value FROM storage_slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Writes a slot value, replacing any previous one.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing storage slot");

        sqlx::query(
            r#"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SlotStorage for SlotRepository {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.fetch(key).await?)
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        Ok(self.put(key, &value).await?)
    }
}
