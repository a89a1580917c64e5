//! Storage Configuration
//!
//! Named constants and the config passed into the task store.

/// Key holding the serialized task list
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Storage budget the gauge measures against (5 MB, the usual localStorage quota)
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Console log level for the browser build
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Key under which the task list is written
    pub key: String,
    /// Budget used for the usage percentage
    pub max_bytes: u64,
}

impl StorageConfig {
    pub fn new(key: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            key: key.into(),
            max_bytes,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY, DEFAULT_MAX_BYTES)
    }
}
