//! To-Do Frontend App
//!
//! Main application component: input form, gauge and task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, SaveErrorBanner, StorageGauge, TaskList};
use crate::config::StorageConfig;
use crate::context::{open_browser_board, AppContext};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    // Load persisted tasks once on mount
    let board = open_browser_board(StorageConfig::default());
    provide_context(AppContext::new(board, store));

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            <NewTaskForm />

            <StorageGauge />

            <SaveErrorBanner />

            <TaskList />

            <p class="task-count">{move || {
                format!("{} tasks, {} completed", store.tasks().get().len(), store.completed().get())
            }}</p>
        </main>
    }
}
