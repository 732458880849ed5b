//! Bug API operations.
//!
//! Bugs cannot be created through the API.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::bugs::{BugDetail, BugForm, BugSummary};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List bugs.
    pub async fn list_bugs(&self, query: &ListQuery) -> Result<Page<BugSummary>> {
        let response = self
            .client
            .get(self.url("/api/bugs"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get bug by ID, with its dimension and owners.
    pub async fn get_bug(&self, bug_id: &str) -> Result<BugDetail> {
        let response = self
            .client
            .get(self.url(&format!("/api/bugs/{}", bug_id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Change `resolved` and/or replace the owners.
    pub async fn update_bug(&self, bug_id: &str, form: &BugForm) -> Result<BugDetail> {
        let response = self
            .client
            .put(self.url(&format!("/api/bugs/{}", bug_id)))
            .json(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete bug by ID.
    pub async fn delete_bug(&self, bug_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/bugs/{}", bug_id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
