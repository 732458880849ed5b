//! Alert source API operations.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::cloudwatch::{AlertSource, AlertSourceForm};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List alert sources.
    pub async fn list_alert_sources(&self, query: &ListQuery) -> Result<Page<AlertSource>> {
        let response = self
            .client
            .get(self.url("/api/alert-sources"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an alert source.
    pub async fn create_alert_source(&self, form: &AlertSourceForm) -> Result<AlertSource> {
        let response = self
            .client
            .post(self.url("/api/alert-sources"))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get alert source by ID.
    pub async fn get_alert_source(&self, id: i64) -> Result<AlertSource> {
        let response = self
            .client
            .get(self.url(&format!("/api/alert-sources/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update an alert source.
    pub async fn update_alert_source(&self, id: i64, form: &AlertSourceForm) -> Result<AlertSource> {
        let response = self
            .client
            .put(self.url(&format!("/api/alert-sources/{}", id)))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete alert source by ID.
    pub async fn delete_alert_source(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/alert-sources/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
