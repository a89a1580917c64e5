//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mirrors the
//! task board after every command.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, UsageSnapshot};
use crate::storage::KeyValueStore;
use crate::tasks::TaskBoard;

/// What the UI renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    pub completed: usize,
    /// Latest gauge reading
    pub usage: UsageSnapshot,
    /// Message of the last failed save, cleared on the next success
    pub save_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the board's list into the store
pub fn store_sync_tasks<S: KeyValueStore>(store: &AppStore, board: &TaskBoard<S>) {
    store.tasks().set(board.tasks().to_vec());
    store.completed().set(board.completed_count());
}

pub fn store_set_usage(store: &AppStore, usage: UsageSnapshot) {
    store.usage().set(usage);
}

pub fn store_set_save_error(store: &AppStore, error: Option<String>) {
    store.save_error().set(error);
}
