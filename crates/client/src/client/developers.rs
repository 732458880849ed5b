//! Developer API operations.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::bugs::{Developer, DeveloperForm};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List developers (ten per page).
    pub async fn list_developers(&self, query: &ListQuery) -> Result<Page<Developer>> {
        let response = self
            .client
            .get(self.url("/api/developers"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Link an existing user as a developer.
    pub async fn create_developer(&self, form: &DeveloperForm) -> Result<Developer> {
        let response = self
            .client
            .post(self.url("/api/developers"))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get developer by ID.
    pub async fn get_developer(&self, id: i64) -> Result<Developer> {
        let response = self
            .client
            .get(self.url(&format!("/api/developers/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a developer.
    pub async fn update_developer(&self, id: i64, form: &DeveloperForm) -> Result<Developer> {
        let response = self
            .client
            .put(self.url(&format!("/api/developers/{}", id)))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete developer by ID.
    pub async fn delete_developer(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/developers/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
