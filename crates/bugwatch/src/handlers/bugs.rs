//! Bug admin handlers.
//!
//! `create_bug` is only routed when the bug admin grants add permission.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use bugwatch_core::admin::BUG_ADMIN;
use bugwatch_core::bugs::{
    validate_bug_form, validate_new_bug, BugDetail, BugForm, BugSummary, NewBug,
};
use bugwatch_core::storage::{ListQuery, Page, RepositoryError};

use crate::{handlers::error::AppError, state::AppState};

/// List bugs with owner counts and the affected Lambda (GET /api/bugs).
pub async fn list_bugs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<BugSummary>>, AppError> {
    let params = query.to_params(&BUG_ADMIN);
    Ok(Json(state.bugs.list_bugs(&params).await?))
}

/// Record an ingested bug (POST /api/bugs).
pub async fn create_bug(
    State(state): State<AppState>,
    Json(bug): Json<NewBug>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_bug(&bug)?;

    let bug = state.bugs.create_bug(&bug).await?;

    tracing::info!(bug_id = %bug.bug_id, dimension_id = bug.dimension_id, "Created bug");

    Ok((StatusCode::CREATED, Json(bug)))
}

/// Get a bug with its dimension and owners (GET /api/bugs/{bug_id}).
pub async fn get_bug(
    State(state): State<AppState>,
    Path(bug_id): Path<String>,
) -> Result<Json<BugDetail>, AppError> {
    let detail = state
        .bugs
        .get_bug(&bug_id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Bug",
            id: bug_id.clone(),
        })?;

    Ok(Json(detail))
}

/// Edit `resolved` and the owner inline (PUT /api/bugs/{bug_id}).
pub async fn update_bug(
    State(state): State<AppState>,
    Path(bug_id): Path<String>,
    Json(form): Json<BugForm>,
) -> Result<Json<BugDetail>, AppError> {
    validate_bug_form(&form)?;

    let detail = state.bugs.update_bug(&bug_id, &form).await?;

    tracing::info!(
        bug_id = %bug_id,
        resolved = detail.bug.resolved,
        owners = detail.owners.len(),
        "Updated bug"
    );

    Ok(Json(detail))
}

/// Delete a bug (DELETE /api/bugs/{bug_id}).
pub async fn delete_bug(
    State(state): State<AppState>,
    Path(bug_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.bugs.delete_bug(&bug_id).await?;

    tracing::info!(bug_id = %bug_id, "Deleted bug");

    Ok(StatusCode::OK)
}
