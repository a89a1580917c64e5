//! Task Item Component
//!
//! One row of the list. Clicking the text toggles completion.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskItem(index: usize, task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let class = if task.is_completed { "task-item completed" } else { "task-item" };

    view! {
        <li class=class>
            <span class="task-content" on:click=move |_| {
                if let Err(e) = ctx.toggle_task(index) {
                    log::warn!("toggle #{} failed: {}", index, e);
                }
            }>
                {task.text}
            </span>
            <button class="delete-btn" on:click=move |_| {
                if let Err(e) = ctx.delete_task(index) {
                    log::warn!("delete #{} failed: {}", index, e);
                }
            }>"Delete"</button>
        </li>
    }
}
