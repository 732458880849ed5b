mod choices;
mod error;
mod operations;
mod publisher;
mod put_request;
mod requests;
mod types;

pub use choices::{
    ActionState, Choice, ComparisonOperator, Namespace, Statistic, TreatMissingData,
};
pub use error::AlarmError;
pub use operations::{
    validate_alarm_form, validate_alert_source_form, validate_dimension_form, MAX_METRIC_NAME_LEN,
    MAX_NAME_LEN, MAX_SMALL_INT, MIN_PERIOD_SECONDS,
};
pub use publisher::{AlarmPublisher, PublishError};
pub use put_request::{MetricAlarmRequest, MetricDimension};
pub use requests::{ActionInput, AlarmForm, AlertSourceForm, DimensionForm, DimensionInput};
pub use types::{
    Alarm, AlarmAction, AlarmConfig, AlarmDimension, AlarmSummary, AlertSource, Dimension,
};
