//! Admin form payloads for the alarm configuration models.
//!
//! These types are shared between the server and client.

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_trimmed_string, trimmed};

use super::choices::{ActionState, ComparisonOperator, Namespace, Statistic, TreatMissingData};

fn default_true() -> bool {
    true
}

fn default_evaluation_periods() -> u16 {
    1
}

/// Alarm change form: the alarm fields plus both inlines.
///
/// Used for both create and update; an update replaces every field and
/// every inline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub description: String,
    pub statistic: Statistic,
    pub threshold: u16,
    pub comparison_operator: ComparisonOperator,
    pub period: u16,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub metric_name: String,
    pub namespace: Namespace,
    pub treat_missing_data: TreatMissingData,
    #[serde(default = "default_evaluation_periods")]
    pub evaluation_periods: u16,
    #[serde(default)]
    pub actions: Vec<ActionInput>,
    #[serde(default)]
    pub dimensions: Vec<DimensionInput>,
}

impl AlarmForm {
    /// Starts a form with the required fields and admin defaults.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        metric_name: impl Into<String>,
    ) -> Self {
        Self {
            name: trimmed(name),
            description: trimmed(description),
            statistic: Statistic::SampleCount,
            threshold: 1,
            comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
            period: 60,
            is_active: true,
            metric_name: trimmed(metric_name),
            namespace: Namespace::Lambda,
            treat_missing_data: TreatMissingData::Missing,
            evaluation_periods: default_evaluation_periods(),
            actions: Vec::new(),
            dimensions: Vec::new(),
        }
    }

    pub fn with_statistic(mut self, statistic: Statistic) -> Self {
        self.statistic = statistic;
        self
    }

    pub fn with_threshold(mut self, threshold: u16, operator: ComparisonOperator) -> Self {
        self.threshold = threshold;
        self.comparison_operator = operator;
        self
    }

    pub fn with_period(mut self, period: u16) -> Self {
        self.period = period;
        self
    }

    pub fn with_treat_missing_data(mut self, treat: TreatMissingData) -> Self {
        self.treat_missing_data = treat;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_action(mut self, action: ActionState, arn_id: i64) -> Self {
        self.actions.push(ActionInput { action, arn_id });
        self
    }

    pub fn with_dimension(mut self, dimension_id: i64) -> Self {
        self.dimensions.push(DimensionInput { dimension_id });
        self
    }
}

/// One row of the alarm action inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub action: ActionState,
    pub arn_id: i64,
}

/// One row of the alarm dimension inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionInput {
    pub dimension_id: i64,
}

/// Alert source form. `arn_id` is excluded from the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSourceForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub value: String,
}

impl AlertSourceForm {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: trimmed(name),
            value: trimmed(value),
        }
    }
}

/// Dimension form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub value: String,
}

impl DimensionForm {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: trimmed(name),
            value: trimmed(value),
        }
    }
}
