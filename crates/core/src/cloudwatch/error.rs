use thiserror::Error;

use crate::arn::ArnError;
use crate::validation::ValidationError;

/// Errors raised by the alarm change form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlarmError {
    #[error("Threshold must be at most {max}")]
    ThresholdOutOfRange { max: u16 },
    #[error("Period must be between {min} and {max} seconds")]
    PeriodOutOfRange { min: u16, max: u16 },
    #[error("Evaluation periods must be between 1 and {max}")]
    EvaluationPeriodsOutOfRange { max: u16 },
    #[error("At least {min} action is required")]
    MissingActions { min: usize },
    #[error("At most {max} actions are allowed")]
    TooManyActions { max: usize },
    #[error("Duplicate action {action} for alert source {arn_id}")]
    DuplicateAction { action: &'static str, arn_id: i64 },
    #[error("At least {min} dimension is required")]
    MissingDimensions { min: usize },
    #[error("At most {max} dimensions are allowed")]
    TooManyDimensions { max: usize },
}

impl From<AlarmError> for ValidationError {
    fn from(err: AlarmError) -> Self {
        let (field, code) = match &err {
            AlarmError::ThresholdOutOfRange { .. } => ("threshold", "max_value"),
            AlarmError::PeriodOutOfRange { .. } => ("period", "out_of_range"),
            AlarmError::EvaluationPeriodsOutOfRange { .. } => ("evaluation_periods", "out_of_range"),
            AlarmError::MissingActions { .. } => ("actions", "too_few_forms"),
            AlarmError::TooManyActions { .. } => ("actions", "too_many_forms"),
            AlarmError::DuplicateAction { .. } => ("actions", "unique_together"),
            AlarmError::MissingDimensions { .. } => ("dimensions", "too_few_forms"),
            AlarmError::TooManyDimensions { .. } => ("dimensions", "too_many_forms"),
        };
        ValidationError::new(field, code, err.to_string())
    }
}

impl From<ArnError> for ValidationError {
    fn from(err: ArnError) -> Self {
        ValidationError::new("value", err.code(), err.to_string())
    }
}
