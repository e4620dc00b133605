//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod storage;

pub use storage::{
    SnapshotStorage, SnapshotStorageError, SnapshotStorageResult, validate_storage_key,
};
