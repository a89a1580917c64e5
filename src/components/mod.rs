//! UI Components
//!
//! Leptos components for the task list and storage gauge.

mod new_task_form;
mod task_item;
mod task_list;
mod storage_gauge;
mod save_error_banner;

pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use storage_gauge::StorageGauge;
pub use save_error_banner::SaveErrorBanner;
