//! In-memory task store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{NewTask, Task, TaskPatch, is_blank_title};
use tokio::sync::RwLock;
use tracing::debug;

use crate::{TaskStore, TaskStoreError, TaskStoreResult};

const TASK: &str = "Task";

/// In-memory task store.
///
/// Tasks live in a single vector behind one lock, so every operation sees
/// and leaves the collection in a consistent state. Cloning shares the same
/// collection.
#[derive(Debug, Default, Clone)]
pub struct MemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryTaskStore {
    /// Creates a new, empty in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(tasks: &[Task], id: &str) -> TaskStoreResult<usize> {
    tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| TaskStoreError::not_found(TASK, id))
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.clone())
    }

    async fn get_task(&self, id: &str) -> TaskStoreResult<Task> {
        let tasks = self.tasks.read().await;
        let index = position(&tasks, id)?;
        Ok(tasks[index].clone())
    }

    async fn create_task(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let NewTask {
            title, description, ..
        } = new_task;

        let title = match title {
            Some(title) if !is_blank_title(Some(title.as_str())) => title,
            _ => return Err(TaskStoreError::validation("Title is required")),
        };

        let mut task = Task::new(title);
        if let Some(description) = description {
            task = task.with_description(description);
        }

        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        debug!(task_id = %task.id, total = tasks.len(), "Task stored");
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut tasks = self.tasks.write().await;
        let index = position(&tasks, id)?;

        if patch.title.is_some() && is_blank_title(patch.title.as_deref()) {
            return Err(TaskStoreError::validation("Title must not be empty"));
        }

        let task = &mut tasks[index];
        task.apply(patch);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().await;
        let index = position(&tasks, id)?;
        tasks.remove(index);
        debug!(task_id = %id, total = tasks.len(), "Task removed");
        Ok(())
    }

    async fn count(&self) -> TaskStoreResult<usize> {
        Ok(self.tasks.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    #[tokio::test]
    async fn test_task_crud() {
        let store = MemoryTaskStore::new();

        // Create
        let created = assert_ok!(store.create_task(NewTask::new("Buy milk")).await);
        assert_eq!(created.title, "Buy milk");
        assert!(!created.completed);

        // Get
        let fetched = assert_ok!(store.get_task(&created.id).await);
        assert_eq!(fetched, created);

        // List
        let tasks = assert_ok!(store.list_tasks().await);
        assert_eq!(tasks, vec![created.clone()]);

        // Delete
        assert_ok!(store.delete_task(&created.id).await);
        let err = assert_err!(store.get_task(&created.id).await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_appears_once_in_list() {
        let store = MemoryTaskStore::new();
        store.create_task(NewTask::new("Existing")).await.unwrap();

        let created = store
            .create_task(NewTask::new("Walk the dog").with_description("Before 9"))
            .await
            .unwrap();

        let tasks = store.list_tasks().await.unwrap();
        let matching: Vec<_> = tasks.iter().filter(|t| t.title == "Walk the dog").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, created.id);
        assert_eq!(matching[0].description, "Before 9");
        assert!(!matching[0].completed);
    }

    #[tokio::test]
    async fn test_create_ignores_completed_flag() {
        let store = MemoryTaskStore::new();
        let new_task = NewTask {
            completed: Some(true),
            ..NewTask::new("Buy milk")
        };

        let created = store.create_task(new_task).await.unwrap();
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn test_create_without_title_is_rejected() {
        let store = MemoryTaskStore::new();

        for new_task in [NewTask::default(), NewTask::new(""), NewTask::new("   ")] {
            let err = assert_err!(store.create_task(new_task).await);
            assert!(matches!(err, TaskStoreError::Validation(_)));
        }

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryTaskStore::new();
        for title in ["first", "second", "third"] {
            store.create_task(NewTask::new(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_rapid_creates_get_unique_ids() {
        let store = MemoryTaskStore::new();
        for i in 0..100 {
            store.create_task(NewTask::new(format!("task {i}"))).await.unwrap();
        }

        let mut ids: Vec<String> = store
            .list_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[tokio::test]
    async fn test_update_completed_only() {
        let store = MemoryTaskStore::new();
        let created = store
            .create_task(NewTask::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();

        let updated = store
            .update_task(&created.id, TaskPatch::completed(true))
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2 liters");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.get_task(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryTaskStore::new();
        let created = store.create_task(NewTask::new("Buy milk")).await.unwrap();

        let err = store
            .update_task("missing", TaskPatch::completed(true))
            .await
            .unwrap_err();
        assert_eq!(err, TaskStoreError::not_found("Task", "missing"));

        assert_eq!(store.list_tasks().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_blank_title_is_rejected() {
        let store = MemoryTaskStore::new();
        let created = store.create_task(NewTask::new("Buy milk")).await.unwrap();

        let patch = TaskPatch::completed(true).with_title(" ");
        let err = store.update_task(&created.id, patch).await.unwrap_err();
        assert!(matches!(err, TaskStoreError::Validation(_)));

        assert_eq!(store.get_task(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = MemoryTaskStore::new();
        let keep = store.create_task(NewTask::new("keep")).await.unwrap();
        let removed = store.create_task(NewTask::new("removed")).await.unwrap();

        store.delete_task(&removed.id).await.unwrap();

        assert_eq!(store.list_tasks().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryTaskStore::new();
        let created = store.create_task(NewTask::new("Buy milk")).await.unwrap();

        assert_ok!(store.delete_task(&created.id).await);
        let err = assert_err!(store.delete_task(&created.id).await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clones_share_collection() {
        let store = MemoryTaskStore::new();
        let other = store.clone();

        let created = store.create_task(NewTask::new("shared")).await.unwrap();
        assert_eq!(other.get_task(&created.id).await.unwrap(), created);
    }
}
