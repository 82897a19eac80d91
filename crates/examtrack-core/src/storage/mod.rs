//! Key-value persistence collaborators.
//!
//! The store durably mirrors its snapshot through this interface. Execution
//! contexts without storage get [`OfflineStore`]; the store keeps operating
//! in memory and defers the write.

mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::HashMap;

use thiserror::Error;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage unavailable")]
    Unavailable,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A blob store holding one string value per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-process store; also the default test collaborator.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Collaborator for contexts with no storage at all; every call reports
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineStore;

impl KeyValueStore for OfflineStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}
