//! Dimension API operations.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::cloudwatch::{Dimension, DimensionForm};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List dimensions.
    pub async fn list_dimensions(&self, query: &ListQuery) -> Result<Page<Dimension>> {
        let response = self
            .client
            .get(self.url("/api/dimensions"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a dimension.
    pub async fn create_dimension(&self, form: &DimensionForm) -> Result<Dimension> {
        let response = self
            .client
            .post(self.url("/api/dimensions"))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get dimension by ID.
    pub async fn get_dimension(&self, id: i64) -> Result<Dimension> {
        let response = self
            .client
            .get(self.url(&format!("/api/dimensions/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a dimension.
    pub async fn update_dimension(&self, id: i64, form: &DimensionForm) -> Result<Dimension> {
        let response = self
            .client
            .put(self.url(&format!("/api/dimensions/{}", id)))
            .form(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete dimension by ID.
    pub async fn delete_dimension(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/dimensions/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
