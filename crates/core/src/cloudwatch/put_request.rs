//! Parameters for the CloudWatch `PutMetricAlarm` call.
//!
//! Pure mapping from a saved [`AlarmConfig`] to the request fields. The
//! actual SDK call lives in the server crate.

use serde::{Deserialize, Serialize};

use super::choices::{ActionState, ComparisonOperator, Namespace, Statistic, TreatMissingData};
use super::types::AlarmConfig;

/// `{Name, Value}` pair scoping the alarm's metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDimension {
    pub name: String,
    pub value: String,
}

/// One `PutMetricAlarm` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricAlarmRequest {
    pub alarm_name: String,
    pub alarm_description: String,
    pub metric_name: String,
    pub namespace: Namespace,
    pub statistic: Statistic,
    pub comparison_operator: ComparisonOperator,
    pub threshold: f64,
    pub period: i32,
    pub evaluation_periods: i32,
    #[serde(rename = "OKActions")]
    pub ok_actions: Vec<String>,
    pub alarm_actions: Vec<String>,
    pub dimensions: Vec<MetricDimension>,
    pub actions_enabled: bool,
    pub treat_missing_data: TreatMissingData,
}

impl From<&AlarmConfig> for MetricAlarmRequest {
    /// `OK` actions become `OKActions`; every other state goes to `AlarmActions`.
    fn from(config: &AlarmConfig) -> Self {
        let alarm = &config.alarm;

        let (ok, other): (Vec<_>, Vec<_>) = config
            .actions
            .iter()
            .partition(|action| action.action == ActionState::Ok);

        let dimensions = config
            .dimensions
            .iter()
            .map(|d| MetricDimension {
                name: d.dimension.name.clone(),
                value: d.dimension.value.clone(),
            })
            .collect();

        Self {
            alarm_name: alarm.name.clone(),
            alarm_description: alarm.description.clone(),
            metric_name: alarm.metric_name.clone(),
            namespace: alarm.namespace,
            statistic: alarm.statistic,
            comparison_operator: alarm.comparison_operator,
            threshold: f64::from(alarm.threshold),
            period: i32::from(alarm.period),
            evaluation_periods: i32::from(alarm.evaluation_periods),
            ok_actions: ok.into_iter().map(|a| a.source.value.clone()).collect(),
            alarm_actions: other.into_iter().map(|a| a.source.value.clone()).collect(),
            dimensions,
            actions_enabled: alarm.is_active,
            treat_missing_data: alarm.treat_missing_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudwatch::types::{Alarm, AlarmAction, AlarmDimension, AlertSource, Dimension};

    const TOPIC: &str = "arn:aws:sns:ap-southeast-2:058188477434:LambdaErrorMetrix";
    const FUNCTION: &str =
        "arn:aws:lambda:ap-southeast-2:058188477434:function:ErrorLogFunctionPython";

    fn source(arn_id: i64, value: &str) -> AlertSource {
        AlertSource {
            arn_id,
            name: format!("source-{arn_id}"),
            value: value.to_string(),
        }
    }

    fn config() -> AlarmConfig {
        AlarmConfig {
            alarm: Alarm {
                alarm_id: 1,
                name: "lambda-errors-alarm".to_string(),
                description: "Alarm for Lambda function errors".to_string(),
                statistic: Statistic::SampleCount,
                threshold: 3,
                comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
                period: 10,
                is_active: false,
                metric_name: "Errors".to_string(),
                namespace: Namespace::Lambda,
                treat_missing_data: TreatMissingData::NotBreaching,
                evaluation_periods: 2,
            },
            actions: vec![
                AlarmAction {
                    id: 1,
                    alarm_id: 1,
                    action: ActionState::Ok,
                    source: source(1, TOPIC),
                },
                AlarmAction {
                    id: 2,
                    alarm_id: 1,
                    action: ActionState::Alarm,
                    source: source(1, TOPIC),
                },
                AlarmAction {
                    id: 3,
                    alarm_id: 1,
                    action: ActionState::InsufficientData,
                    source: source(2, FUNCTION),
                },
            ],
            dimensions: vec![AlarmDimension {
                id: 1,
                alarm_id: 1,
                dimension: Dimension {
                    dimension_id: 9,
                    name: "Resource".to_string(),
                    value: "OrivetApi-AnimalGetById".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_scalar_fields_map_one_to_one() {
        let request = MetricAlarmRequest::from(&config());

        assert_eq!(request.alarm_name, "lambda-errors-alarm");
        assert_eq!(request.alarm_description, "Alarm for Lambda function errors");
        assert_eq!(request.metric_name, "Errors");
        assert_eq!(request.namespace, Namespace::Lambda);
        assert_eq!(request.statistic, Statistic::SampleCount);
        assert_eq!(request.threshold, 3.0);
        assert_eq!(request.period, 10);
        assert_eq!(request.evaluation_periods, 2);
        assert!(!request.actions_enabled);
        assert_eq!(request.treat_missing_data, TreatMissingData::NotBreaching);
    }

    #[test]
    fn test_actions_split_by_state() {
        let request = MetricAlarmRequest::from(&config());

        assert_eq!(request.ok_actions, vec![TOPIC.to_string()]);
        assert_eq!(
            request.alarm_actions,
            vec![TOPIC.to_string(), FUNCTION.to_string()]
        );
    }

    #[test]
    fn test_dimensions_carry_name_and_value() {
        let request = MetricAlarmRequest::from(&config());

        assert_eq!(
            request.dimensions,
            vec![MetricDimension {
                name: "Resource".to_string(),
                value: "OrivetApi-AnimalGetById".to_string(),
            }]
        );
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let json = serde_json::to_value(MetricAlarmRequest::from(&config())).unwrap();

        assert_eq!(json["AlarmName"], "lambda-errors-alarm");
        assert_eq!(json["Namespace"], "AWS/Lambda");
        assert_eq!(json["OKActions"][0], TOPIC);
        assert_eq!(json["Dimensions"][0]["Name"], "Resource");
        assert_eq!(json["TreatMissingData"], "notBreaching");
        assert_eq!(json["ActionsEnabled"], false);
    }
}
