//! HTTP client for the bugwatch API.

pub mod alarms;
pub mod alert_sources;
pub mod bugs;
pub mod developers;
pub mod dimensions;
pub mod health;
pub mod users;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Body of a 400 response.
#[derive(Debug, Deserialize)]
struct ValidationBody {
    field: String,
    code: String,
    message: String,
}

/// HTTP client for the bugwatch API.
#[derive(Debug, Clone)]
pub struct BugwatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl BugwatchClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (BUGWATCH_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BUGWATCH_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let resource = response.url().path().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error_for_status(status, resource, message)
    }
}

fn error_for_status(status: u16, resource: String, message: String) -> ClientError {
    match status {
        400 => match serde_json::from_str::<ValidationBody>(&message) {
            Ok(body) => ClientError::Validation {
                field: body.field,
                code: body.code,
                message: body.message,
            },
            Err(_) => ClientError::ServerError { status, message },
        },
        404 => ClientError::NotFound { resource },
        409 => ClientError::Conflict(message),
        _ => ClientError::ServerError { status, message },
    }
}
