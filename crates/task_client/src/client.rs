//! HTTP client for the task endpoints.

use entities::{NewTask, Task, TaskPatch};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ClientError;

/// Default server URL, matching the server's default port.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Error body the server sends with every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the Task Manager API.
#[derive(Debug, Clone)]
pub struct TaskClient {
    /// Server URL
    server_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl Default for TaskClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl TaskClient {
    /// Create a new client for the server at `server_url`.
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Server URL this client talks to.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.server_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.server_url, urlencoding::encode(id))
    }

    /// List all tasks.
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, ClientError> {
        debug!("Fetching all tasks");
        let response = self.http_client.get(self.tasks_url()).send().await?;
        decode(response).await
    }

    /// Fetch one task.
    pub async fn get_task_by_id(&self, id: &str) -> Result<Task, ClientError> {
        debug!(task_id = %id, "Fetching task");
        let response = self.http_client.get(self.task_url(id)).send().await?;
        decode(response).await
    }

    /// Create a task.
    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task, ClientError> {
        debug!("Creating task");
        let response = self
            .http_client
            .post(self.tasks_url())
            .json(new_task)
            .send()
            .await?;
        decode(response).await
    }

    /// Apply a partial update to a task.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ClientError> {
        debug!(task_id = %id, "Updating task");
        let response = self
            .http_client
            .put(self.task_url(id))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        debug!(task_id = %id, "Deleting task");
        let response = self.http_client.delete(self.task_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Check server health.
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self
            .http_client
            .get(format!("{}/health", self.server_url))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Passes successful responses through and maps everything else to an error.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    })
}
