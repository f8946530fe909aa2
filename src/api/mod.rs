mod client;
mod error;
mod models;
mod resource;

pub use error::ApiError;
pub use models::TaskDraft;
pub use resource::Task;

use anyhow::Result;
use client::Client;
use log::*;
use models::TaskModel;
use reqwest::Method;

/// Path of the task collection resource, relative to the base URL.
const COLLECTION_PATH: &str = "api/tasks";

impl From<TaskModel> for Task {
    fn from(model: TaskModel) -> Task {
        Task {
            id: model.id,
            name: model.name,
            completed: model.completed,
        }
    }
}

/// Responsible for asynchronous interaction with the task API including
/// transformation of response data into explicitly-defined types.
///
pub struct TaskService {
    client: Client,
}

impl TaskService {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> TaskService {
        debug!("Initializing task service for base URL {}...", base_url);
        TaskService {
            client: Client::new(base_url),
        }
    }

    /// Returns the server's full task collection.
    ///
    pub async fn list(&self) -> Result<Vec<Task>> {
        debug!("Requesting full task collection...");

        let data: Vec<TaskModel> = self
            .client
            .call(Method::GET, COLLECTION_PATH, None)
            .await?
            .json()
            .await?;

        debug!("Retrieved {} tasks.", data.len());
        Ok(data.into_iter().map(Task::from).collect())
    }

    /// Create a new task from the given draft and return the server's record.
    ///
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        debug!("Creating task '{}'...", draft.name);

        let model: TaskModel = self
            .client
            .call(
                Method::POST,
                COLLECTION_PATH,
                Some(serde_json::to_value(draft)?),
            )
            .await?
            .json()
            .await?;

        Ok(model.into())
    }

    /// Replace the task with the given identifier using the full draft body.
    ///
    pub async fn update(&self, id: &str, draft: &TaskDraft) -> Result<Task> {
        debug!("Updating task {}...", id);

        let path = format!("{}/{}", COLLECTION_PATH, id);
        let model: TaskModel = self
            .client
            .call(Method::PUT, &path, Some(serde_json::to_value(draft)?))
            .await?
            .json()
            .await?;

        Ok(model.into())
    }

    /// Delete the task with the given identifier.
    ///
    pub async fn delete(&self, id: &str) -> Result<()> {
        debug!("Deleting task {}...", id);

        let path = format!("{}/{}", COLLECTION_PATH, id);
        self.client.call(Method::DELETE, &path, None).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn list_success() -> Result<()> {
        let tasks: [Task; 2] = [Faker.fake(), Faker.fake()];

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(200).json_body(json!([
                    {
                        "_id": tasks[0].id,
                        "name": tasks[0].name,
                        "completed": tasks[0].completed,
                    },
                    {
                        "_id": tasks[1].id,
                        "name": tasks[1].name,
                        "completed": tasks[1].completed,
                    }
                ]));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let listed = service.list().await?;
        mock.assert_async().await;
        assert_eq!(listed, tasks.to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn list_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(500).body("boom");
            })
            .await;

        let service = TaskService::new(&server.base_url());
        assert!(service.list().await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_success() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/tasks")
                    .json_body(json!({ "name": "Buy milk", "completed": false }));
                then.status(201).json_body(json!({
                    "_id": "abc123",
                    "name": "Buy milk",
                    "completed": false,
                }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let draft = TaskDraft {
            name: "Buy milk".to_string(),
            completed: false,
        };
        let created = service.create(&draft).await?;
        mock.assert_async().await;
        assert_eq!(created.id, "abc123");
        assert_eq!(created.name, "Buy milk");
        Ok(())
    }

    #[tokio::test]
    async fn update_success() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/api/tasks/7")
                    .json_body(json!({ "name": "X", "completed": true }));
                then.status(200).json_body(json!({
                    "_id": "7",
                    "name": "X",
                    "completed": true,
                }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let draft = TaskDraft {
            name: "X".to_string(),
            completed: true,
        };
        let updated = service.update("7", &draft).await?;
        mock.assert_async().await;
        assert!(updated.completed);
        assert_eq!(updated.name, "X");
        Ok(())
    }

    #[tokio::test]
    async fn delete_success() -> Result<()> {
        let id: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(move |when, then| {
                when.method("DELETE").path(format!("/api/tasks/{}", id));
                then.status(204);
            })
            .await;

        let service = TaskService::new(&server.base_url());
        service.delete(&id.to_string()).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_not_found() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/api/tasks/missing");
                then.status(404).body("Task not found");
            })
            .await;

        let service = TaskService::new(&server.base_url());
        assert!(service.delete("missing").await.is_err());
        mock.assert_async().await;
    }
}
