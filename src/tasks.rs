//! Task Commands
//!
//! List mutations invoked by the UI. `TaskBoard` ends every command by
//! saving the full list.

use thiserror::Error;

use crate::error::StorageError;
use crate::models::{Task, UsageSnapshot};
use crate::storage::KeyValueStore;
use crate::task_store::TaskStore;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("Task text is empty")]
    EmptyText,

    #[error("No task at position {0}")]
    NotFound(usize),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Append a new task with trimmed text
pub fn add_task(tasks: &mut Vec<Task>, raw: &str) -> Result<(), TaskError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    tasks.push(Task::new(text));
    Ok(())
}

/// Flip completion of the task at `index`, returning the new state
pub fn toggle_task(tasks: &mut [Task], index: usize) -> Result<bool, TaskError> {
    let task = tasks.get_mut(index).ok_or(TaskError::NotFound(index))?;
    task.is_completed = !task.is_completed;
    Ok(task.is_completed)
}

/// Remove the task at `index`, keeping the order of the rest
pub fn delete_task(tasks: &mut Vec<Task>, index: usize) -> Result<Task, TaskError> {
    if index >= tasks.len() {
        return Err(TaskError::NotFound(index));
    }
    Ok(tasks.remove(index))
}

/// In-memory task list bound to its durable store.
///
/// A failed save keeps the mutated list; the store stays dirty until
/// `retry_save` or a later command succeeds.
pub struct TaskBoard<S> {
    tasks: Vec<Task>,
    store: TaskStore<S>,
}

impl<S: KeyValueStore> TaskBoard<S> {
    /// Load persisted tasks
    pub fn open(store: TaskStore<S>) -> Self {
        let tasks = store.load();
        Self { tasks, store }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn usage(&self) -> Result<UsageSnapshot, TaskError> {
        Ok(self.store.usage()?)
    }

    pub fn add(&mut self, raw: &str) -> Result<UsageSnapshot, TaskError> {
        add_task(&mut self.tasks, raw)?;
        self.save()
    }

    pub fn toggle(&mut self, index: usize) -> Result<UsageSnapshot, TaskError> {
        toggle_task(&mut self.tasks, index)?;
        self.save()
    }

    pub fn delete(&mut self, index: usize) -> Result<UsageSnapshot, TaskError> {
        delete_task(&mut self.tasks, index)?;
        self.save()
    }

    /// Write the current list again after a failed save
    pub fn retry_save(&mut self) -> Result<UsageSnapshot, TaskError> {
        self.save()
    }

    fn save(&self) -> Result<UsageSnapshot, TaskError> {
        Ok(self.store.save(&self.tasks)?)
    }
}
