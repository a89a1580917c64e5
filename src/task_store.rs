//! Task Store Facade
//!
//! Loads the task list on startup and rewrites it on every mutation,
//! reporting storage usage after each write.

use std::cell::Cell;

use crate::capacity::{classify_usage, measure_store_bytes};
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::models::{Task, UsageSnapshot};
use crate::serializer;
use crate::storage::KeyValueStore;

pub struct TaskStore<S> {
    backend: S,
    config: StorageConfig,
    /// Set when the last write failed, cleared by the next successful one
    dirty: Cell<bool>,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(backend: S, config: StorageConfig) -> Self {
        Self {
            backend,
            config,
            dirty: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Persisted tasks in stored order. Never fails: read and parse errors
    /// collapse to an empty list.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.backend.get(&self.config.key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to read '{}': {}", self.config.key, e);
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            log::debug!("no saved tasks under '{}'", self.config.key);
            return Vec::new();
        };

        match serializer::try_deserialize(&raw) {
            Ok(tasks) => {
                log::info!("loaded {} tasks", tasks.len());
                tasks
            }
            Err(e) => {
                log::warn!("discarding unreadable task list: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `tasks`, then measure the whole store.
    ///
    /// A measurement failure after a good write is `StorageError::Unmeasured`
    /// and leaves the store clean.
    pub fn save(&self, tasks: &[Task]) -> StorageResult<UsageSnapshot> {
        let written = serializer::serialize(tasks)
            .map_err(|e| StorageError::Encode(e.to_string()))
            .and_then(|value| self.backend.set(&self.config.key, &value));
        if let Err(e) = written {
            log::error!("failed to save {} tasks: {}", tasks.len(), e);
            self.dirty.set(true);
            return Err(e);
        }
        self.dirty.set(false);
        log::debug!("saved {} tasks", tasks.len());
        self.usage().map_err(|e| StorageError::Unmeasured(e.to_string()))
    }

    /// Current usage without writing anything
    pub fn usage(&self) -> StorageResult<UsageSnapshot> {
        let bytes = measure_store_bytes(&self.backend)?;
        Ok(classify_usage(bytes, self.config.max_bytes))
    }
}
