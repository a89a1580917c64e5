//! Error Types
//!
//! Storage failures reported by durable-store backends.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Browser storage is disabled or missing (private mode, blocked cookies)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },

    #[error("Storage error: {0}")]
    Backend(String),

    /// Task list could not be encoded; nothing was written
    #[error("Could not encode tasks: {0}")]
    Encode(String),

    /// The write went through but total usage could not be measured
    #[error("Saved, but storage usage is unknown: {0}")]
    Unmeasured(String),
}

impl StorageError {
    /// Whether the task list failed to reach storage
    pub fn is_write_failure(&self) -> bool {
        !matches!(self, StorageError::Unmeasured(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
