use std::fmt;

use serde::{Deserialize, Serialize};

use super::choices::{ActionState, ComparisonOperator, Namespace, Statistic, TreatMissingData};

/// A CloudWatch metric alarm mirrored as a local record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub alarm_id: i64,
    pub name: String,
    pub description: String,
    pub statistic: Statistic,
    pub threshold: u16,
    pub comparison_operator: ComparisonOperator,
    /// Evaluation period in seconds.
    pub period: u16,
    pub is_active: bool,
    pub metric_name: String,
    pub namespace: Namespace,
    pub treat_missing_data: TreatMissingData,
    pub evaluation_periods: u16,
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ARN that CloudWatch notifies when an alarm changes state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSource {
    pub arn_id: i64,
    pub name: String,
    pub value: String,
}

impl fmt::Display for AlertSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A named resource tag that scopes a metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub dimension_id: i64,
    pub name: String,
    pub value: String,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An alarm action row joined with its alert source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmAction {
    pub id: i64,
    pub alarm_id: i64,
    pub action: ActionState,
    pub source: AlertSource,
}

/// An alarm dimension row joined with its dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDimension {
    pub id: i64,
    pub alarm_id: i64,
    pub dimension: Dimension,
}

/// An alarm together with its inline actions and dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    #[serde(flatten)]
    pub alarm: Alarm,
    pub actions: Vec<AlarmAction>,
    pub dimensions: Vec<AlarmDimension>,
}

/// Row shown in the alarm admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSummary {
    pub alarm_id: i64,
    pub name: String,
}

impl From<&Alarm> for AlarmSummary {
    fn from(alarm: &Alarm) -> Self {
        Self {
            alarm_id: alarm.alarm_id,
            name: alarm.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_alarm() -> Alarm {
        Alarm {
            alarm_id: 7,
            name: "lambda-errors-alarm".to_string(),
            description: "Alarm for Lambda function errors".to_string(),
            statistic: Statistic::SampleCount,
            threshold: 3,
            comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
            period: 10,
            is_active: true,
            metric_name: "Errors".to_string(),
            namespace: Namespace::Lambda,
            treat_missing_data: TreatMissingData::Missing,
            evaluation_periods: 1,
        }
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(sample_alarm().to_string(), "lambda-errors-alarm");

        let source = AlertSource {
            arn_id: 1,
            name: "Ops topic".to_string(),
            value: "arn:aws:sns:us-east-1:123456789012:ops".to_string(),
        };
        assert_eq!(source.to_string(), "arn:aws:sns:us-east-1:123456789012:ops");

        let dimension = Dimension {
            dimension_id: 1,
            name: "FunctionName".to_string(),
            value: "orders-api".to_string(),
        };
        assert_eq!(dimension.to_string(), "orders-api");
    }

    #[test]
    fn test_alarm_config_serializes_flat() {
        let config = AlarmConfig {
            alarm: sample_alarm(),
            actions: vec![],
            dimensions: vec![],
        };
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["alarm_id"], 7);
        assert_eq!(json["namespace"], "AWS/Lambda");
        assert_eq!(json["treat_missing_data"], "missing");
        assert!(json["actions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_summary_from_alarm() {
        let summary = AlarmSummary::from(&sample_alarm());
        assert_eq!(summary.alarm_id, 7);
        assert_eq!(summary.name, "lambda-errors-alarm");
    }
}
