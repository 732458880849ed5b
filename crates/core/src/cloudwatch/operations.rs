use std::collections::HashSet;

use crate::admin::{ALARM_ACTION_INLINE, ALARM_DIMENSION_INLINE};
use crate::arn::validate_arn;
use crate::validation::{check_text, ValidationError};

use super::choices::Choice;
use super::error::AlarmError;
use super::requests::{AlarmForm, AlertSourceForm, DimensionForm};

/// Largest value a positive small integer column accepts.
pub const MAX_SMALL_INT: u16 = 32767;

/// Shortest evaluation period CloudWatch supports, in seconds.
pub const MIN_PERIOD_SECONDS: u16 = 10;

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_METRIC_NAME_LEN: usize = 55;

/// Validates the alarm change form, inlines included.
pub fn validate_alarm_form(form: &AlarmForm) -> Result<(), ValidationError> {
    check_text("name", &form.name, MAX_NAME_LEN)?;
    check_text("description", &form.description, MAX_NAME_LEN)?;
    check_text("metric_name", &form.metric_name, MAX_METRIC_NAME_LEN)?;

    if form.threshold > MAX_SMALL_INT {
        return Err(AlarmError::ThresholdOutOfRange { max: MAX_SMALL_INT }.into());
    }
    if form.period < MIN_PERIOD_SECONDS || form.period > MAX_SMALL_INT {
        return Err(AlarmError::PeriodOutOfRange {
            min: MIN_PERIOD_SECONDS,
            max: MAX_SMALL_INT,
        }
        .into());
    }
    if form.evaluation_periods == 0 || form.evaluation_periods > MAX_SMALL_INT {
        return Err(AlarmError::EvaluationPeriodsOutOfRange { max: MAX_SMALL_INT }.into());
    }

    validate_inline_count(
        form.actions.len(),
        ALARM_ACTION_INLINE.min_num,
        ALARM_ACTION_INLINE.max_num,
    )
    .map_err(|bound| match bound {
        InlineBound::TooFew(min) => AlarmError::MissingActions { min },
        InlineBound::TooMany(max) => AlarmError::TooManyActions { max },
    })?;

    let mut seen = HashSet::new();
    for input in &form.actions {
        if !seen.insert((input.action, input.arn_id)) {
            return Err(AlarmError::DuplicateAction {
                action: input.action.as_str(),
                arn_id: input.arn_id,
            }
            .into());
        }
    }

    validate_inline_count(
        form.dimensions.len(),
        ALARM_DIMENSION_INLINE.min_num,
        ALARM_DIMENSION_INLINE.max_num,
    )
    .map_err(|bound| match bound {
        InlineBound::TooFew(min) => AlarmError::MissingDimensions { min },
        InlineBound::TooMany(max) => AlarmError::TooManyDimensions { max },
    })?;

    Ok(())
}

/// Validates the alert source form, including the ARN check on `value`.
pub fn validate_alert_source_form(form: &AlertSourceForm) -> Result<(), ValidationError> {
    check_text("name", &form.name, MAX_NAME_LEN)?;
    check_text("value", &form.value, MAX_NAME_LEN)?;
    validate_arn(&form.value)?;
    Ok(())
}

/// Validates the dimension form.
pub fn validate_dimension_form(form: &DimensionForm) -> Result<(), ValidationError> {
    check_text("name", &form.name, MAX_NAME_LEN)?;
    check_text("value", &form.value, MAX_NAME_LEN)?;
    Ok(())
}

enum InlineBound {
    TooFew(usize),
    TooMany(usize),
}

fn validate_inline_count(
    count: usize,
    min_num: usize,
    max_num: Option<usize>,
) -> Result<(), InlineBound> {
    if count < min_num {
        return Err(InlineBound::TooFew(min_num));
    }
    match max_num {
        Some(max) if count > max => Err(InlineBound::TooMany(max)),
        _ => Ok(()),
    }
}
