//! In-memory store, used in tests and when browser storage is disabled.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::capacity::entry_bytes;
use crate::error::{StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    /// Byte limit checked on every write, using the gauge's byte estimate
    quota: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes pushing total usage past `quota` bytes
    #[cfg(test)]
    pub fn with_quota(quota: u64) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Seed a value without quota checks
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(quota) = self.quota {
            let others: u64 = self
                .entries
                .borrow()
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_bytes(k, v))
                .sum();
            if others + entry_bytes(key, value) > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.insert(key, value);
        Ok(())
    }

    fn entries(&self) -> StorageResult<Vec<(String, String)>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
