//! Alarm API operations.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::cloudwatch::{AlarmConfig, AlarmForm, AlarmSummary};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List alarms.
    pub async fn list_alarms(&self, query: &ListQuery) -> Result<Page<AlarmSummary>> {
        let response = self
            .client
            .get(self.url("/api/alarms"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an alarm. The server publishes it to CloudWatch.
    pub async fn create_alarm(&self, form: &AlarmForm) -> Result<AlarmConfig> {
        let response = self
            .client
            .post(self.url("/api/alarms"))
            .json(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get alarm by ID, with its actions and dimensions.
    pub async fn get_alarm(&self, id: i64) -> Result<AlarmConfig> {
        let response = self
            .client
            .get(self.url(&format!("/api/alarms/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace an alarm. The server publishes it to CloudWatch.
    pub async fn update_alarm(&self, id: i64, form: &AlarmForm) -> Result<AlarmConfig> {
        let response = self
            .client
            .put(self.url(&format!("/api/alarms/{}", id)))
            .json(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete alarm by ID.
    pub async fn delete_alarm(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/alarms/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
