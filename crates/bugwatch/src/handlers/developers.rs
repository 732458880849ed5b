use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use bugwatch_core::admin::DEVELOPER_ADMIN;
use bugwatch_core::bugs::{Developer, DeveloperForm};
use bugwatch_core::storage::{ListQuery, Page, RepositoryError};

use crate::{handlers::error::AppError, state::AppState};

/// List developers, ten per page, searchable by username (GET /api/developers).
pub async fn list_developers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Developer>>, AppError> {
    let params = query.to_params(&DEVELOPER_ADMIN);
    Ok(Json(state.developers.list_developers(&params).await?))
}

/// Link a user as a developer (POST /api/developers).
pub async fn create_developer(
    State(state): State<AppState>,
    Form(form): Form<DeveloperForm>,
) -> Result<impl IntoResponse, AppError> {
    let developer = state.developers.create_developer(&form).await?;

    tracing::info!(
        developer_id = developer.id,
        username = %developer.username,
        "Created developer"
    );

    Ok((StatusCode::CREATED, Json(developer)))
}

/// Get a single developer (GET /api/developers/{id}).
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Developer>, AppError> {
    let developer = state
        .developers
        .get_developer(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Developer",
            id: id.to_string(),
        })?;

    Ok(Json(developer))
}

/// Update a developer (PUT /api/developers/{id}).
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeveloperForm>,
) -> Result<Json<Developer>, AppError> {
    let developer = state.developers.update_developer(id, &form).await?;

    tracing::info!(developer_id = id, "Updated developer");

    Ok(Json(developer))
}

/// Delete a developer (DELETE /api/developers/{id}).
///
/// Fails with 409 while the developer owns a bug.
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.developers.delete_developer(id).await?;

    tracing::info!(developer_id = id, "Deleted developer");

    Ok(StatusCode::OK)
}
