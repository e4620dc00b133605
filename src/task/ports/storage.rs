//! Storage port for durable task list snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot storage operations.
pub type SnapshotStorageResult<T> = Result<T, SnapshotStorageError>;

/// Durable, key-addressed storage holding one serialized snapshot per slot.
///
/// Writes fully replace the previous contents of the slot.
pub trait SnapshotStorage: Send + Sync {
    /// Reads the snapshot stored under `key`.
    ///
    /// Returns `None` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStorageError::InvalidKey`] for malformed keys or
    /// [`SnapshotStorageError::Io`] when the backing store cannot be read.
    fn read(&self, key: &str) -> SnapshotStorageResult<Option<String>>;

    /// Replaces the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStorageError::InvalidKey`] for malformed keys or
    /// [`SnapshotStorageError::Io`] when the backing store cannot be written.
    fn write(&self, key: &str, snapshot: &str) -> SnapshotStorageResult<()>;
}

/// Errors returned by snapshot storage implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStorageError {
    /// The slot key contains unsupported characters.
    #[error("invalid storage key '{0}', expected ASCII letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// Backing store failure.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl SnapshotStorageError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Checks that `key` is usable as a slot name by every adapter.
///
/// # Errors
///
/// Returns [`SnapshotStorageError::InvalidKey`] when `key` is empty or
/// contains anything other than ASCII alphanumerics, `-` or `_`.
pub fn validate_storage_key(key: &str) -> SnapshotStorageResult<()> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(SnapshotStorageError::InvalidKey(key.to_owned()));
    }
    Ok(())
}
