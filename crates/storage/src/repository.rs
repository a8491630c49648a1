use async_trait::async_trait;
use edulearn_core::model::{SessionKey, SessionRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted session record.
///
/// Every method works on the whole record so callers never observe a
/// half-written session.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Read the current record. Missing keys yield an anonymous record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn load_session(&self) -> Result<SessionRecord, StorageError>;

    /// Replace the stored record: present fields are written, absent ones removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError>;

    /// Remove every session key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the keys cannot be removed.
    async fn clear_session(&self) -> Result<(), StorageError>;
}

/// Key/value store held in memory, for tests and throwaway runs.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Raw read of a single entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_item(&self, key: SessionKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key.as_str()).cloned())
    }

    /// Raw write of a single entry, bypassing the record-level contract.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn set_item(&self, key: SessionKey, value: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.as_str().to_string(), value.into());
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn load_session(&self) -> Result<SessionRecord, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(SessionRecord::from_entries(|key| {
            guard.get(key.as_str()).cloned()
        }))
    }

    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for (key, value) in record.entries() {
            match value {
                Some(value) => {
                    guard.insert(key.as_str().to_string(), value.to_string());
                }
                None => {
                    guard.remove(key.as_str());
                }
            }
        }
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for key in SessionKey::ALL {
            guard.remove(key.as_str());
        }
        Ok(())
    }
}

/// Handles to every repository the app needs.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self { sessions: repo }
    }
}
