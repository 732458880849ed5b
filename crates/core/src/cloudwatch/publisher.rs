use async_trait::async_trait;
use thiserror::Error;

use super::put_request::MetricAlarmRequest;

/// Errors returned when forwarding an alarm to CloudWatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("CloudWatch rejected alarm {alarm_name}: {message}")]
    Rejected { alarm_name: String, message: String },
    #[error("CloudWatch alarm limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("CloudWatch request failed: {0}")]
    Transport(String),
}

/// Sends saved alarms to CloudWatch.
#[async_trait]
pub trait AlarmPublisher: Send + Sync {
    /// Creates or replaces the remote alarm described by `request`.
    async fn put_metric_alarm(&self, request: &MetricAlarmRequest) -> Result<(), PublishError>;
}
