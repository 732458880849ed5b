use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use bugwatch_core::admin::USER_ADMIN;
use bugwatch_core::bugs::{validate_user_form, User, UserForm};
use bugwatch_core::storage::{ListQuery, Page};

use crate::{handlers::error::AppError, state::AppState};

/// List users (GET /api/users).
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<User>>, AppError> {
    let params = query.to_params(&USER_ADMIN);
    Ok(Json(state.users.list_users(&params).await?))
}

/// Create a new user (POST /api/users).
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<impl IntoResponse, AppError> {
    validate_user_form(&form)?;

    let user = state.users.create_user(&form).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user by ID (DELETE /api/users/{id}).
///
/// Also deletes the linked developer record.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.users.delete_user(id).await?;

    tracing::info!(user_id = id, "Deleted user");

    Ok(StatusCode::OK)
}
