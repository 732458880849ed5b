//! Health check operations.

use super::BugwatchClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Storage health reported by `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageHealth {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BugwatchClient {
    /// Liveness probe. True when the server answers 200.
    pub async fn livez(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Storage health. A 503 still carries a health body.
    pub async fn healthz(&self) -> Result<StorageHealth> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        if response.status().as_u16() == 503 {
            return Ok(response.json().await?);
        }
        self.handle_response(response).await
    }
}
