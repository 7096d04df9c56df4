//! # Storage Slots
//!
//! The cart is persisted as one string value under one key. Backends only
//! need get/set by key, so the browser-style local store, SQLite and an
//! in-memory map all fit behind [`SlotStorage`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup ──► get(key) ──► Cart::from_slot_value ──► in-memory cart      │
//! │                                                                         │
//! │  Each successful operation:                                            │
//! │     new cart ──► Cart::to_slot_value ──► set(key, value) ──► install   │
//! │                  (full overwrite)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Key-value persistence for slot strings.
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Reads a slot; `None` if it was never written.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites a slot.
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;
}

/// Process-local slot storage.
///
/// Used by tests and by sessions that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already written.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.lock().insert(key.into(), value.into());
        storage
    }

    /// Synchronous read, for assertions.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SlotStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value);
        Ok(())
    }
}
