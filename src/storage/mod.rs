//! Durable Store Backends
//!
//! Key-value storage the task store writes through, organized by backend.

mod memory;
mod web;

use crate::error::StorageResult;

pub use memory::MemoryStore;
pub use web::WebStorage;

/// String-keyed durable store, shaped after the browser `Storage` API.
///
/// Writes take `&self` because the browser store is a shared handle.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Every key/value pair currently stored
    fn entries(&self) -> StorageResult<Vec<(String, String)>>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn entries(&self) -> StorageResult<Vec<(String, String)>> {
        (**self).entries()
    }
}
