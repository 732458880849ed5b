use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use bugwatch_core::admin::ALARM_ADMIN;
use bugwatch_core::cloudwatch::{
    validate_alarm_form, AlarmConfig, AlarmForm, AlarmSummary, MetricAlarmRequest,
};
use bugwatch_core::storage::{ListQuery, Page, RepositoryError};

use crate::{handlers::error::AppError, state::AppState};

/// Forwards a saved alarm to CloudWatch.
///
/// The local row is already committed; a failure here leaves it in place.
async fn publish(state: &AppState, config: &AlarmConfig) -> Result<(), AppError> {
    let request = MetricAlarmRequest::from(config);

    if let Err(e) = state.publisher.put_metric_alarm(&request).await {
        tracing::error!(
            alarm_id = config.alarm.alarm_id,
            alarm_name = %config.alarm.name,
            error = %e,
            "PutMetricAlarm failed; alarm saved locally"
        );
        return Err(e.into());
    }

    Ok(())
}

/// List alarms (GET /api/alarms).
pub async fn list_alarms(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AlarmSummary>>, AppError> {
    let params = query.to_params(&ALARM_ADMIN);
    let page = state.alarms.list_alarms(&params).await?;
    Ok(Json(page))
}

/// Create an alarm and push it to CloudWatch (POST /api/alarms).
pub async fn create_alarm(
    State(state): State<AppState>,
    Json(form): Json<AlarmForm>,
) -> Result<impl IntoResponse, AppError> {
    validate_alarm_form(&form)?;

    let config = state.alarms.create_alarm(&form).await?;

    tracing::info!(alarm_id = config.alarm.alarm_id, name = %config.alarm.name, "Created alarm");

    publish(&state, &config).await?;

    Ok((StatusCode::CREATED, Json(config)))
}

/// Get a single alarm with its inlines (GET /api/alarms/{id}).
pub async fn get_alarm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AlarmConfig>, AppError> {
    let config = state
        .alarms
        .get_alarm(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Alarm",
            id: id.to_string(),
        })?;

    Ok(Json(config))
}

/// Replace an alarm and its inlines, then push it to CloudWatch (PUT /api/alarms/{id}).
pub async fn update_alarm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<AlarmForm>,
) -> Result<Json<AlarmConfig>, AppError> {
    validate_alarm_form(&form)?;

    let config = state.alarms.update_alarm(id, &form).await?;

    tracing::info!(alarm_id = id, "Updated alarm");

    publish(&state, &config).await?;

    Ok(Json(config))
}

/// Delete an alarm (DELETE /api/alarms/{id}).
///
/// Only the local row and its inlines are removed. The CloudWatch alarm
/// stays in place.
pub async fn delete_alarm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.alarms.delete_alarm(id).await?;

    tracing::info!(alarm_id = id, "Deleted alarm");

    Ok(StatusCode::OK)
}
