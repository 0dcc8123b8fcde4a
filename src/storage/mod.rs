//! Key-value storage
//!
//! Values are kept as serialized JSON text under string keys, the same way a
//! browser's local storage holds them. The [`Storage`] trait is the raw
//! string interface; [`StorageAdapter`] adds typed `load`/`save` on top.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by storage backends and the adapter
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file {path}: {source}")]
    CorruptFile {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to decode value for key {key:?}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode value for key {key:?}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode storage file {path}: {source}")]
    EncodeFile {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of serialized values
pub trait Storage: Send + Sync {
    /// Get the raw value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw value under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Typed view over a shared [`Storage`] backend
#[derive(Clone)]
pub struct StorageAdapter {
    backend: Arc<dyn Storage>,
}

impl StorageAdapter {
    pub fn new(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    /// Adapter over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Load and deserialize the value under `key`; `None` when absent
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get_item(key)? else {
            tracing::debug!("Storage key {:?} is absent", key);
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Serialize `value` and store it under `key`
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set_item(key, &raw)?;
        tracing::debug!("Saved {} bytes under {:?}", raw.len(), key);
        Ok(())
    }

    /// Remove `key` from the backend
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove_item(key)
    }
}

impl fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAdapter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        hits: u32,
    }

    #[test]
    fn test_absent_key_loads_none() {
        let storage = StorageAdapter::in_memory();
        let value: Option<Counter> = storage.load("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = StorageAdapter::in_memory();
        storage.save("counter", &Counter { hits: 7 }).unwrap();
        let value: Option<Counter> = storage.load("counter").unwrap();
        assert_eq!(value, Some(Counter { hits: 7 }));
    }

    #[test]
    fn test_values_are_json_text() {
        let backend = Arc::new(MemoryStorage::new());
        let storage = StorageAdapter::new(backend.clone());
        storage.save("counter", &Counter { hits: 3 }).unwrap();
        assert_eq!(
            backend.get_item("counter").unwrap().as_deref(),
            Some(r#"{"hits":3}"#)
        );
    }

    #[test]
    fn test_malformed_value_is_decode_error() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set_item("counter", "not json").unwrap();
        let storage = StorageAdapter::new(backend);
        let err = storage.load::<Counter>("counter").unwrap_err();
        assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "counter"));
    }

    #[test]
    fn test_remove() {
        let storage = StorageAdapter::in_memory();
        storage.save("counter", &Counter { hits: 1 }).unwrap();
        storage.remove("counter").unwrap();
        assert!(storage.load::<Counter>("counter").unwrap().is_none());
    }
}
