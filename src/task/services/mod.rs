//! Application services for task list management.

mod config;
mod store;

pub use config::{DEFAULT_STORAGE_KEY, StoreConfig};
pub use store::{TaskCounts, TaskStore, TaskStoreError, TaskStoreResult};
