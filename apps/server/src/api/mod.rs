//! API endpoints.

pub mod task;

use std::sync::Arc;

use axum::{Router, routing::get};
use task_store::TaskStore;

use crate::error::ServerError;
use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TaskStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Task endpoints
        .route("/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/tasks/{id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        // Liveness
        .route("/", get(root))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

/// Root banner, handy to see the server is alive from a browser.
async fn root() -> &'static str {
    "Task Manager API is running"
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

async fn route_not_found() -> ServerError {
    ServerError::NotFound("Route not found".to_string())
}
