//! AWS SDK client setup and the CloudWatch publisher.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_cloudwatch::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::put_metric_alarm::PutMetricAlarmError,
    types, Client,
};

use bugwatch_core::cloudwatch::{
    AlarmPublisher, Choice, MetricAlarmRequest, MetricDimension, PublishError,
};

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for LocalStack).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local CloudWatch ({url})"),
            None => format!("AWS CloudWatch (region: {})", self.region),
        }
    }
}

/// Creates a CloudWatch client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Sends one `PutMetricAlarm` call per saved alarm.
#[derive(Clone)]
pub struct CloudWatchPublisher {
    client: Client,
}

impl CloudWatchPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlarmPublisher for CloudWatchPublisher {
    async fn put_metric_alarm(&self, request: &MetricAlarmRequest) -> Result<(), PublishError> {
        let dimensions = to_sdk_dimensions(&request.dimensions)?;

        self.client
            .put_metric_alarm()
            .alarm_name(&request.alarm_name)
            .alarm_description(&request.alarm_description)
            .metric_name(&request.metric_name)
            .namespace(request.namespace.as_str())
            .statistic(types::Statistic::from(request.statistic.as_str()))
            .comparison_operator(types::ComparisonOperator::from(
                request.comparison_operator.as_str(),
            ))
            .threshold(request.threshold)
            .period(request.period)
            .evaluation_periods(request.evaluation_periods)
            .set_ok_actions(Some(request.ok_actions.clone()))
            .set_alarm_actions(Some(request.alarm_actions.clone()))
            .set_dimensions(Some(dimensions))
            .actions_enabled(request.actions_enabled)
            .treat_missing_data(request.treat_missing_data.as_str())
            .send()
            .await
            .map_err(|err| map_sdk_error(&request.alarm_name, err))?;

        tracing::info!(alarm_name = %request.alarm_name, "PutMetricAlarm succeeded");
        Ok(())
    }
}

fn to_sdk_dimensions(dimensions: &[MetricDimension]) -> Result<Vec<types::Dimension>, PublishError> {
    dimensions
        .iter()
        .map(|d| {
            Ok(types::Dimension::builder()
                .name(&d.name)
                .value(&d.value)
                .build())
        })
        .collect()
}

/// Maps an SDK failure. Service errors keep CloudWatch's message.
fn map_sdk_error<R: Debug>(
    alarm_name: &str,
    err: SdkError<PutMetricAlarmError, R>,
) -> PublishError {
    match err {
        SdkError::ServiceError(context) => match context.into_err() {
            PutMetricAlarmError::LimitExceededFault(fault) => PublishError::LimitExceeded(
                fault
                    .message()
                    .unwrap_or("too many alarms")
                    .to_string(),
            ),
            other => PublishError::Rejected {
                alarm_name: alarm_name.to_string(),
                message: other
                    .message()
                    .or(other.code())
                    .unwrap_or("unknown service error")
                    .to_string(),
            },
        },
        other => PublishError::Transport(DisplayErrorContext(&other).to_string()),
    }
}
