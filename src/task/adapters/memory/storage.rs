//! In-memory snapshot storage for task store tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{
    SnapshotStorage, SnapshotStorageError, SnapshotStorageResult, validate_storage_key,
};

/// Thread-safe in-memory snapshot storage.
///
/// Clones share the same slots, so a test can hand one clone to a store and
/// inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with `snapshot` already present under `key`.
    ///
    /// The key is not validated, which lets tests seed arbitrary slots.
    #[must_use]
    pub fn with_snapshot(key: impl Into<String>, snapshot: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), snapshot.into());
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Returns the raw snapshot stored under `key`, if any.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.slots
            .read()
            .ok()
            .and_then(|slots| slots.get(key).cloned())
    }
}

fn lock_error(err: impl ToString) -> SnapshotStorageError {
    SnapshotStorageError::io(std::io::Error::other(err.to_string()))
}

impl SnapshotStorage for InMemorySnapshotStorage {
    fn read(&self, key: &str) -> SnapshotStorageResult<Option<String>> {
        validate_storage_key(key)?;
        let slots = self.slots.read().map_err(lock_error)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, snapshot: &str) -> SnapshotStorageResult<()> {
        validate_storage_key(key)?;
        let mut slots = self.slots.write().map_err(lock_error)?;
        slots.insert(key.to_owned(), snapshot.to_owned());
        Ok(())
    }
}
