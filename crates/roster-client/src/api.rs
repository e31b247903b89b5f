//! Employee API client.
//!
//! Failure responses are reduced to one user-facing line: the server's
//! `message`, then (for create/update) its first `errors` entry, then a
//! fixed fallback per operation.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use roster_core::constants::DEFAULT_API_BASE_URL;
use roster_core::{ApiFailure, ApiResponse, Employee, EmployeeDraft, EmployeeId};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced to the client state coordinator.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a failure status.
    #[error("{message}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// Best available description.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Operations the client issues against the employee API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// All employees, or those whose name contains `search` when non-empty.
    async fn list(&self, search: &str) -> Result<Vec<Employee>, ClientError>;
    /// Create an employee and return the stored record.
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, ClientError>;
    /// Replace every field of employee `id`.
    async fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee, ClientError>;
    /// Delete employee `id`.
    async fn delete(&self, id: EmployeeId) -> Result<(), ClientError>;
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn fallback(self, status: StatusCode) -> String {
        match self {
            Self::List => format!("API Error: {}", status.as_u16()),
            Self::Create => "Failed to add employee.".into(),
            Self::Update => "Failed to update employee.".into(),
            Self::Delete => "Failed to delete employee.".into(),
        }
    }

    fn message_for(self, failure: &ApiFailure, status: StatusCode) -> String {
        let detailed = match self {
            Self::Create | Self::Update => failure.best_message(),
            Self::List | Self::Delete => Some(failure.message.as_str()).filter(|m| !m.is_empty()),
        };
        detailed.map_or_else(|| self.fallback(status), str::to_owned)
    }
}

/// [`EmployeeApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpEmployeeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeApi {
    /// Client for the collection at `base_url` (e.g. `http://host:5000/api/employees`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`Self::new`] with a preconfigured `reqwest` client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Collection URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: EmployeeId) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Decode the success envelope's `data`, or turn a failure into [`ClientError::Api`].
    async fn read<T: DeserializeOwned>(
        resp: Response,
        op: Operation,
    ) -> Result<Option<T>, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body: ApiResponse<Option<T>> = resp.json().await?;
            return Ok(body.data);
        }
        let failure: ApiFailure = resp.json().await.unwrap_or_default();
        let message = op.message_for(&failure, status);
        debug!(status = status.as_u16(), ?op, %message, "api request failed");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn missing_data(op: Operation, status: StatusCode) -> ClientError {
        ClientError::Api {
            status: status.as_u16(),
            message: op.fallback(status),
        }
    }
}

impl Default for HttpEmployeeApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self, search: &str) -> Result<Vec<Employee>, ClientError> {
        let mut req = self.client.get(&self.base_url);
        if !search.is_empty() {
            req = req.query(&[("search", search)]);
        }
        let resp = req.send().await?;
        Ok(Self::read::<Vec<Employee>>(resp, Operation::List)
            .await?
            .unwrap_or_default())
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, ClientError> {
        let resp = self.client.post(&self.base_url).json(draft).send().await?;
        let status = resp.status();
        Self::read(resp, Operation::Create)
            .await?
            .ok_or_else(|| Self::missing_data(Operation::Create, status))
    }

    async fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee, ClientError> {
        let resp = self.client.put(self.item_url(id)).json(draft).send().await?;
        let status = resp.status();
        Self::read(resp, Operation::Update)
            .await?
            .ok_or_else(|| Self::missing_data(Operation::Update, status))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), ClientError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        let _ = Self::read::<serde_json::Value>(resp, Operation::Delete).await?;
        Ok(())
    }
}
