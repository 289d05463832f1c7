//! Task store trait definitions.

use async_trait::async_trait;
use entities::{NewTask, Task, TaskPatch};

use crate::TaskStoreResult;

/// Trait for task storage operations.
///
/// Implementations keep tasks in insertion order.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists all tasks in insertion order.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Gets a task by ID.
    async fn get_task(&self, id: &str) -> TaskStoreResult<Task>;

    /// Creates a new task. Fails with a validation error if the title is
    /// missing or blank.
    async fn create_task(&self, new_task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial update to a task and returns the updated record.
    async fn update_task(&self, id: &str, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Deletes a task.
    async fn delete_task(&self, id: &str) -> TaskStoreResult<()>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskStoreResult<usize> {
        Ok(self.list_tasks().await?.len())
    }
}
