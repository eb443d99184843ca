use std::future::Future;

use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::task::Task;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{action}")]
    Status { action: Action, status: StatusCode },
}

/// Which call failed; its `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Toggle,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "Could not fetch tasks",
            Self::Create => "Failed to add task",
            Self::Toggle => "Failed to toggle task",
        })
    }
}

/// The three calls the view issues against the task service.
pub trait TaskApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Task>, ClientError>> + Send;
    fn create(&self, title: &str) -> impl Future<Output = Result<Task, ClientError>> + Send;
    fn toggle(&self, id: &str) -> impl Future<Output = Result<Task, ClientError>> + Send;
}

#[derive(Clone)]
pub struct TaskClient {
    base_url: String,
    http: reqwest::Client,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
        action: Action,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status { action, status });
        }
        Ok(resp.json().await?)
    }
}

impl TaskApi for TaskClient {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await?;
        Self::decode(resp, Action::List).await
    }

    async fn create(&self, title: &str) -> Result<Task, ClientError> {
        let resp = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .json(&json!({ "title": title }))
            .send()
            .await?;
        Self::decode(resp, Action::Create).await
    }

    async fn toggle(&self, id: &str) -> Result<Task, ClientError> {
        let resp = self
            .http
            .patch(format!("{}/tasks/{id}/toggle", self.base_url))
            .send()
            .await?;
        Self::decode(resp, Action::Toggle).await
    }
}
