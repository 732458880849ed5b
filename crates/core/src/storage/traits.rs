use async_trait::async_trait;

use crate::bugs::{
    Bug, BugDetail, BugForm, BugSummary, Developer, DeveloperForm, NewBug, User, UserForm,
};
use crate::cloudwatch::{
    AlarmConfig, AlarmForm, AlarmSummary, AlertSource, AlertSourceForm, Dimension, DimensionForm,
};

use super::{ListParams, Page, Result};

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists users, searching by username.
    async fn list_users(&self, params: &ListParams) -> Result<Page<User>>;

    /// Gets a user by their ID.
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Creates a new user.
    async fn create_user(&self, form: &UserForm) -> Result<User>;

    /// Deletes a user and, through the cascade, their developer record.
    async fn delete_user(&self, id: i64) -> Result<()>;
}

/// Repository for developer operations.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Lists developers, searching by the linked username.
    async fn list_developers(&self, params: &ListParams) -> Result<Page<Developer>>;

    async fn get_developer(&self, id: i64) -> Result<Option<Developer>>;

    async fn create_developer(&self, form: &DeveloperForm) -> Result<Developer>;

    async fn update_developer(&self, id: i64, form: &DeveloperForm) -> Result<Developer>;

    /// Deletes a developer. Fails with `InUse` while they own a bug.
    async fn delete_developer(&self, id: i64) -> Result<()>;
}

/// Repository for bug operations.
#[async_trait]
pub trait BugRepository: Send + Sync {
    /// Lists bugs with their owner count and dimension value.
    async fn list_bugs(&self, params: &ListParams) -> Result<Page<BugSummary>>;

    async fn get_bug(&self, bug_id: &str) -> Result<Option<BugDetail>>;

    /// Records a bug reported by ingestion.
    async fn create_bug(&self, bug: &NewBug) -> Result<Bug>;

    /// Applies the change form and bumps `updated_at`.
    async fn update_bug(&self, bug_id: &str, form: &BugForm) -> Result<BugDetail>;

    async fn delete_bug(&self, bug_id: &str) -> Result<()>;
}

/// Repository for alarm configuration operations.
#[async_trait]
pub trait AlarmRepository: Send + Sync {
    async fn list_alarms(&self, params: &ListParams) -> Result<Page<AlarmSummary>>;

    /// Gets an alarm with its actions and dimensions.
    async fn get_alarm(&self, id: i64) -> Result<Option<AlarmConfig>>;

    /// Creates an alarm and its inline rows.
    async fn create_alarm(&self, form: &AlarmForm) -> Result<AlarmConfig>;

    /// Replaces an alarm's fields and inline rows.
    async fn update_alarm(&self, id: i64, form: &AlarmForm) -> Result<AlarmConfig>;

    /// Deletes an alarm. Inline rows cascade.
    async fn delete_alarm(&self, id: i64) -> Result<()>;
}

/// Repository for alert source operations.
#[async_trait]
pub trait AlertSourceRepository: Send + Sync {
    /// Lists alert sources, searching by ARN value.
    async fn list_alert_sources(&self, params: &ListParams) -> Result<Page<AlertSource>>;

    async fn get_alert_source(&self, id: i64) -> Result<Option<AlertSource>>;

    async fn create_alert_source(&self, form: &AlertSourceForm) -> Result<AlertSource>;

    async fn update_alert_source(&self, id: i64, form: &AlertSourceForm) -> Result<AlertSource>;

    /// Deletes an alert source. Fails with `InUse` while an alarm action uses it.
    async fn delete_alert_source(&self, id: i64) -> Result<()>;
}

/// Repository for dimension operations.
#[async_trait]
pub trait DimensionRepository: Send + Sync {
    /// Lists dimensions, searching by value.
    async fn list_dimensions(&self, params: &ListParams) -> Result<Page<Dimension>>;

    async fn get_dimension(&self, id: i64) -> Result<Option<Dimension>>;

    async fn create_dimension(&self, form: &DimensionForm) -> Result<Dimension>;

    async fn update_dimension(&self, id: i64, form: &DimensionForm) -> Result<Dimension>;

    /// Deletes a dimension and its bugs. Fails with `InUse` while an alarm
    /// references it.
    async fn delete_dimension(&self, id: i64) -> Result<()>;
}

/// Liveness probe for the storage backend.
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Runs a trivial round trip against the backend.
    async fn ping(&self) -> Result<()>;
}
