//! Browser `localStorage` backend.

use wasm_bindgen::{JsCast, JsValue};

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// Handle to the page's `window.localStorage`
#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Open `localStorage`, failing when the browser has it disabled
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_text(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_error_text(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                }
            } else {
                StorageError::Backend(js_error_text(&e))
            }
        })
    }

    fn entries(&self) -> StorageResult<Vec<(String, String)>> {
        let len = self
            .storage
            .length()
            .map_err(|e| StorageError::Backend(js_error_text(&e)))?;

        let mut entries = Vec::with_capacity(len as usize);
        for i in 0..len {
            let key = self
                .storage
                .key(i)
                .map_err(|e| StorageError::Backend(js_error_text(&e)))?;
            if let Some(key) = key {
                let value = self.get(&key)?.unwrap_or_default();
                entries.push((key, value));
            }
        }
        Ok(entries)
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "QuotaExceededError")
        .unwrap_or(false)
}

fn js_error_text(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(e) => format!("{}: {}", e.name(), e.message()),
        None => format!("{:?}", err),
    }
}
