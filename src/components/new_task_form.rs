//! New Task Form Component
//!
//! Text input with an Add button. Enter submits the form.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::tasks::TaskError;

/// Blocking notice shown for blank input
const EMPTY_TASK_ALERT: &str = "Please enter a task!";

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(TaskError::EmptyText) = ctx.add_task(&new_text.get()) {
            let _ = window().alert_with_message(EMPTY_TASK_ALERT);
            return;
        }
        // Storage failures still keep the new task on screen; the banner reports them
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                id="todo-input"
                placeholder="Enter a new task..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="add-button">"Add"</button>
        </form>
    }
}
