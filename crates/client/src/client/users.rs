//! User API operations.

use super::BugwatchClient;
use crate::error::Result;
use bugwatch_core::bugs::{User, UserForm};
use bugwatch_core::storage::{ListQuery, Page};

impl BugwatchClient {
    /// List users.
    pub async fn list_users(&self, query: &ListQuery) -> Result<Page<User>> {
        let response = self
            .client
            .get(self.url("/api/users"))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new user.
    pub async fn create_user(&self, username: &str) -> Result<User> {
        let response = self
            .client
            .post(self.url("/api/users"))
            .form(&UserForm::new(username))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete user by ID.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/users/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
