use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use bugwatch_core::admin::ALERT_SOURCE_ADMIN;
use bugwatch_core::cloudwatch::{validate_alert_source_form, AlertSource, AlertSourceForm};
use bugwatch_core::storage::{ListQuery, Page, RepositoryError};

use crate::{handlers::error::AppError, state::AppState};

/// List alert sources, searchable by ARN (GET /api/alert-sources).
pub async fn list_alert_sources(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AlertSource>>, AppError> {
    let params = query.to_params(&ALERT_SOURCE_ADMIN);
    Ok(Json(state.alert_sources.list_alert_sources(&params).await?))
}

/// Create an alert source (POST /api/alert-sources).
pub async fn create_alert_source(
    State(state): State<AppState>,
    Form(form): Form<AlertSourceForm>,
) -> Result<impl IntoResponse, AppError> {
    validate_alert_source_form(&form)?;

    let source = state.alert_sources.create_alert_source(&form).await?;

    tracing::info!(arn_id = source.arn_id, value = %source.value, "Created alert source");

    Ok((StatusCode::CREATED, Json(source)))
}

/// Get a single alert source (GET /api/alert-sources/{id}).
pub async fn get_alert_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AlertSource>, AppError> {
    let source = state
        .alert_sources
        .get_alert_source(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "AlertSource",
            id: id.to_string(),
        })?;

    Ok(Json(source))
}

/// Update an alert source (PUT /api/alert-sources/{id}).
pub async fn update_alert_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AlertSourceForm>,
) -> Result<Json<AlertSource>, AppError> {
    validate_alert_source_form(&form)?;

    let source = state.alert_sources.update_alert_source(id, &form).await?;

    tracing::info!(arn_id = id, "Updated alert source");

    Ok(Json(source))
}

/// Delete an alert source (DELETE /api/alert-sources/{id}).
///
/// Fails with 409 while an alarm action still points at it.
pub async fn delete_alert_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.alert_sources.delete_alert_source(id).await?;

    tracing::info!(arn_id = id, "Deleted alert source");

    Ok(StatusCode::OK)
}
