//! Fixed choice sets for alarm fields.
//!
//! Each choice is stored (and sent to CloudWatch) as its `as_str` value and
//! shown in the admin with its `label`.

use serde::{Deserialize, Serialize};

/// A closed set of stored string values.
pub trait Choice: Sized + Copy + 'static {
    /// Every choice, in display order.
    const ALL: &'static [Self];

    /// The stored value.
    fn as_str(&self) -> &'static str;

    /// The admin display label.
    fn label(&self) -> &'static str;

    /// Parses a stored value.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// `(value, label)` pairs for admin select widgets.
    fn choices() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
    }
}

/// Statistic applied to the metric over each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    SampleCount,
    Sum,
    Average,
    Minimum,
    Maximum,
}

impl Choice for Statistic {
    const ALL: &'static [Self] = &[
        Self::SampleCount,
        Self::Sum,
        Self::Average,
        Self::Minimum,
        Self::Maximum,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::SampleCount => "SampleCount",
            Self::Sum => "Sum",
            Self::Average => "Average",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::SampleCount => "SAMPLE_COUNT",
            Self::Sum => "SUM",
            Self::Average => "AVERAGE",
            Self::Minimum => "MINIMUM",
            Self::Maximum => "MAXIMUM",
        }
    }
}

/// How the statistic is compared against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
    GreaterThanThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
    LessThanLowerOrGreaterThanUpperThreshold,
    LessThanLowerThreshold,
    GreaterThanUpperThreshold,
}

impl Choice for ComparisonOperator {
    const ALL: &'static [Self] = &[
        Self::GreaterThanOrEqualToThreshold,
        Self::GreaterThanThreshold,
        Self::LessThanThreshold,
        Self::LessThanOrEqualToThreshold,
        Self::LessThanLowerOrGreaterThanUpperThreshold,
        Self::LessThanLowerThreshold,
        Self::GreaterThanUpperThreshold,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThanOrEqualToThreshold => "GreaterThanOrEqualToThreshold",
            Self::GreaterThanThreshold => "GreaterThanThreshold",
            Self::LessThanThreshold => "LessThanThreshold",
            Self::LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
            Self::LessThanLowerOrGreaterThanUpperThreshold => {
                "LessThanLowerOrGreaterThanUpperThreshold"
            }
            Self::LessThanLowerThreshold => "LessThanLowerThreshold",
            Self::GreaterThanUpperThreshold => "GreaterThanUpperThreshold",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::GreaterThanOrEqualToThreshold => "GREATER_THAN_OR_EQUAL",
            Self::GreaterThanThreshold => "GREATER_THAN",
            Self::LessThanThreshold => "LESS_THAN",
            Self::LessThanOrEqualToThreshold => "LESS_THAN_OR_EQUAL",
            Self::LessThanLowerOrGreaterThanUpperThreshold => {
                "LESS_THAN_LOWER_OR_GREATER_THAN_UPPER"
            }
            Self::LessThanLowerThreshold => "LESS_THAN_LOWER",
            Self::GreaterThanUpperThreshold => "GREATER_THAN_UPPER",
        }
    }
}

/// CloudWatch namespace the metric lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    #[serde(rename = "AWS/Lambda")]
    Lambda,
    #[serde(rename = "AWS/EC2")]
    Ec2,
}

impl Choice for Namespace {
    const ALL: &'static [Self] = &[Self::Lambda, Self::Ec2];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Lambda => "AWS/Lambda",
            Self::Ec2 => "AWS/EC2",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Lambda => "Lambda",
            Self::Ec2 => "EC2",
        }
    }
}

/// How periods with no data points are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreatMissingData {
    Breaching,
    NotBreaching,
    Ignore,
    Missing,
}

impl Choice for TreatMissingData {
    const ALL: &'static [Self] = &[
        Self::Breaching,
        Self::NotBreaching,
        Self::Ignore,
        Self::Missing,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Breaching => "breaching",
            Self::NotBreaching => "notBreaching",
            Self::Ignore => "ignore",
            Self::Missing => "missing",
        }
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

/// Alarm state that triggers an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionState {
    #[default]
    Ok,
    Alarm,
    InsufficientData,
}

impl Choice for ActionState {
    const ALL: &'static [Self] = &[Self::Ok, Self::Alarm, Self::InsufficientData];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Alarm => "ALARM",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}
