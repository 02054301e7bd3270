//! Key-value storage backends for persisted page state.
//!
//! The storage medium is deliberately opaque: a string-keyed slot store with
//! get/set, the shape of a browser's `localStorage`. The cart injects
//! whichever backend the host picks, which keeps the cart testable without
//! touching the filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Errors raised by a storage backend on write.
///
/// Reads never error: a slot that cannot be read is reported as absent.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot map could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string-keyed slot store.
///
/// Object-safe so stores can be injected as `Box<dyn KeyValueStorage>`.
pub trait KeyValueStorage {
    /// Read the value persisted under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage shared between clones.
///
/// Clones observe each other's writes, the way several page loads in one
/// browser profile observe one `localStorage`. The default backend for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed storage: one JSON object of `{key: value}` slots per file.
///
/// Reads degrade to an empty slot map when the file is missing or corrupt;
/// corruption is logged. Writes are read-modify-write of the whole file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store backed by the file at `path`.
    ///
    /// The file (and its parent directory) is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_slots(&self) -> HashMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            // A missing file is the normal first-run state
            return HashMap::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "storage file is corrupt, treating as empty"
            );
            HashMap::new()
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_slots().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.read_slots();
        slots.insert(key.to_owned(), value.to_owned());

        let json = serde_json::to_string_pretty(&slots)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}
