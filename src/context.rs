//! Application Context
//!
//! Owns the task board and exposes the UI's task commands via the Leptos
//! Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::models::UsageSnapshot;
use crate::storage::{KeyValueStore, MemoryStore, WebStorage};
use crate::store::{store_set_save_error, store_set_usage, store_sync_tasks, AppStore};
use crate::task_store::TaskStore;
use crate::tasks::{TaskBoard, TaskError};

/// Board used by the browser build
pub type BrowserBoard = TaskBoard<Box<dyn KeyValueStore>>;

/// Open the board on `localStorage`, falling back to memory when it is disabled
pub fn open_browser_board(config: StorageConfig) -> BrowserBoard {
    let backend: Box<dyn KeyValueStore> = match WebStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; tasks will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    };
    TaskBoard::open(TaskStore::new(backend, config))
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Source of truth for the task list (not Send, so held in local storage)
    board: StoredValue<BrowserBoard, LocalStorage>,
    /// Reactive mirror the components read
    store: AppStore,
}

impl AppContext {
    pub fn new(board: BrowserBoard, store: AppStore) -> Self {
        let ctx = Self {
            board: StoredValue::new_local(board),
            store,
        };
        ctx.board.with_value(|board| store_sync_tasks(&store, board));
        ctx.refresh_usage();
        ctx
    }

    pub fn add_task(&self, text: &str) -> Result<(), TaskError> {
        self.apply(|board| board.add(text))
    }

    pub fn toggle_task(&self, index: usize) -> Result<(), TaskError> {
        self.apply(|board| board.toggle(index))
    }

    pub fn delete_task(&self, index: usize) -> Result<(), TaskError> {
        self.apply(|board| board.delete(index))
    }

    /// Re-save after a failed write
    pub fn retry_save(&self) -> Result<(), TaskError> {
        self.apply(|board| board.retry_save())
    }

    /// Paint the gauge from the store as it is now
    pub fn refresh_usage(&self) {
        match self.board.with_value(|board| board.usage()) {
            Ok(usage) => store_set_usage(&self.store, usage),
            Err(e) => log::warn!("could not measure storage usage: {}", e),
        }
    }

    /// Run a command, then mirror the list, gauge and save status into the store
    fn apply(
        &self,
        command: impl FnOnce(&mut BrowserBoard) -> Result<UsageSnapshot, TaskError>,
    ) -> Result<(), TaskError> {
        let result = self
            .board
            .try_update_value(command)
            .unwrap_or_else(|| Err(StorageError::Unavailable("task board disposed".to_string()).into()));

        let store = self.store;
        self.board.with_value(|board| store_sync_tasks(&store, board));

        match result {
            Ok(usage) => {
                store_set_usage(&store, usage);
                store_set_save_error(&store, None);
                Ok(())
            }
            Err(TaskError::Storage(e)) if e.is_write_failure() => {
                store_set_save_error(&store, Some(e.to_string()));
                Err(TaskError::Storage(e))
            }
            Err(TaskError::Storage(e)) => {
                // Written; only the gauge is stale
                log::warn!("{}", e);
                store_set_save_error(&store, None);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
