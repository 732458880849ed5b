use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bugwatch_core::cloudwatch::{AlarmPublisher, MetricAlarmRequest, PublishError};

/// Publisher that logs and records requests instead of calling AWS.
#[derive(Clone, Default)]
pub struct DryRunPublisher {
    requests: Arc<Mutex<Vec<MetricAlarmRequest>>>,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn requests(&self) -> Vec<MetricAlarmRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl AlarmPublisher for DryRunPublisher {
    async fn put_metric_alarm(&self, request: &MetricAlarmRequest) -> Result<(), PublishError> {
        tracing::info!(
            alarm_name = %request.alarm_name,
            ok_actions = request.ok_actions.len(),
            alarm_actions = request.alarm_actions.len(),
            "Dry run: skipping PutMetricAlarm"
        );

        self.requests.lock().await.push(request.clone());
        Ok(())
    }
}
