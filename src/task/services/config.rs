//! Configuration for the task store.

/// Storage slot used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Task store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the storage slot holding the task list snapshot.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Sets the storage slot name.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}
