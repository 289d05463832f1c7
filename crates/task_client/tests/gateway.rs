//! Exercises the client against a live server bound to an ephemeral port.

use entities::{NewTask, TaskPatch};
use task_client::{ClientError, TaskClient};
use task_server::{config::Config, create_app, create_state};
use task_store::MemoryTaskStore;

async fn spawn_server() -> TaskClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(create_state(Config::default(), MemoryTaskStore::new()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TaskClient::new(&format!("http://{addr}"))
}

#[tokio::test]
async fn test_task_lifecycle() {
    let client = spawn_server().await;
    client.health_check().await.unwrap();

    let created = client
        .create_task(&NewTask::new("Buy milk").with_description("2 liters"))
        .await
        .unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);

    let updated = client
        .update_task(&created.id, &TaskPatch::completed(true))
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.description, "2 liters");

    let tasks = client.get_all_tasks().await.unwrap();
    assert_eq!(tasks, vec![updated.clone()]);

    let fetched = client.get_task_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, updated);

    client.delete_task(&created.id).await.unwrap();

    let err = client.get_task_by_id(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: Task not found");
}

#[tokio::test]
async fn test_create_without_title_is_validation_error() {
    let client = spawn_server().await;

    let err = client.create_task(&NewTask::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    assert!(client.get_all_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_task_operations() {
    let client = spawn_server().await;

    let err = client
        .update_task("missing", &TaskPatch::completed(true))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = client.delete_task("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TaskClient::new(&format!("http://{addr}"));
    let err = client.get_all_tasks().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
