//! Task API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use entities::{NewTask, Task, TaskPatch};
use task_store::TaskStore;

use crate::error::ServerResult;
use crate::state::AppState;

/// Lists all tasks in insertion order.
pub async fn list_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.list_tasks().await?;
    Ok(Json(tasks))
}

/// Gets a task by ID.
pub async fn get_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<Task>> {
    let Path(id) = path?;
    let task = state.store.get_task(&id).await?;
    Ok(Json(task))
}

/// Creates a new task.
pub async fn create_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    let Json(new_task) = payload?;

    let task = state.store.create_task(new_task).await?;

    tracing::info!(task_id = %task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Applies a partial update to a task.
pub async fn update_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> ServerResult<Json<Task>> {
    let Path(id) = path?;
    let Json(patch) = payload?;

    let task = state.store.update_task(&id, patch).await?;

    tracing::info!(task_id = %task.id, completed = task.completed, "Task updated");

    Ok(Json(task))
}

/// Deletes a task.
pub async fn delete_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<StatusCode> {
    let Path(id) = path?;
    state.store.delete_task(&id).await?;

    tracing::info!(task_id = %id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
