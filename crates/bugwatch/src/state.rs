//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Every repository seam is a trait object backed by the
//! same SQLite connection.

use std::{sync::Arc, time::Duration};

use bugwatch_core::cloudwatch::AlarmPublisher;
use bugwatch_core::storage::{
    AlarmRepository, AlertSourceRepository, BugRepository, DeveloperRepository,
    DimensionRepository, StorageHealth, UserRepository,
};

use crate::{
    cloudwatch::{create_client, CloudWatchPublisher, DryRunPublisher},
    config::Config,
    storage::SqliteRepository,
};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub developers: Arc<dyn DeveloperRepository>,
    pub bugs: Arc<dyn BugRepository>,
    pub alarms: Arc<dyn AlarmRepository>,
    pub alert_sources: Arc<dyn AlertSourceRepository>,
    pub dimensions: Arc<dyn DimensionRepository>,
    /// Database round trip for `/healthz`.
    pub health: Arc<dyn StorageHealth>,
    /// Receives every saved alarm.
    pub publisher: Arc<dyn AlarmPublisher>,
    /// Applied by the timeout layer.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates the state with every repository backed by one SQLite store.
    pub fn build(
        repo: Arc<SqliteRepository>,
        publisher: Arc<dyn AlarmPublisher>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            users: repo.clone(),
            developers: repo.clone(),
            bugs: repo.clone(),
            alarms: repo.clone(),
            alert_sources: repo.clone(),
            dimensions: repo.clone(),
            health: repo,
            publisher,
            request_timeout,
        }
    }

    /// Opens the database and selects the alarm publisher from the config.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

        let publisher: Arc<dyn AlarmPublisher> = if config.cloudwatch_dry_run {
            tracing::warn!("CLOUDWATCH_DRY_RUN is set; alarms will not reach AWS");
            Arc::new(DryRunPublisher::new())
        } else {
            tracing::info!(target_env = %config.aws.target_display(), "Using CloudWatch");
            Arc::new(CloudWatchPublisher::new(create_client(&config.aws).await))
        };

        Ok(Self::build(repo, publisher, config.request_timeout()))
    }

    /// In-memory database and the given publisher.
    #[cfg(test)]
    pub async fn in_memory(publisher: Arc<dyn AlarmPublisher>) -> Self {
        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory database should open");
        Self::build(Arc::new(repo), publisher, Duration::from_secs(10))
    }
}
