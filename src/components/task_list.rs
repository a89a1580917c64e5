//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || store.tasks().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="todo-list" id="todo-list">
            <For
                each=rows
                // Position is the identity, so the key must change whenever a row's content does
                key=|(index, task)| (*index, task.text.clone(), task.is_completed)
                children=move |(index, task)| view! { <TaskItem index=index task=task /> }
            />
        </ul>
    }
}
