use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use bugwatch_core::admin::DIMENSION_ADMIN;
use bugwatch_core::cloudwatch::{validate_dimension_form, Dimension, DimensionForm};
use bugwatch_core::storage::{ListQuery, Page, RepositoryError};

use crate::{handlers::error::AppError, state::AppState};

/// List dimensions, searchable by value (GET /api/dimensions).
pub async fn list_dimensions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Dimension>>, AppError> {
    let params = query.to_params(&DIMENSION_ADMIN);
    Ok(Json(state.dimensions.list_dimensions(&params).await?))
}

/// Create a dimension (POST /api/dimensions).
pub async fn create_dimension(
    State(state): State<AppState>,
    Form(form): Form<DimensionForm>,
) -> Result<impl IntoResponse, AppError> {
    validate_dimension_form(&form)?;

    let dimension = state.dimensions.create_dimension(&form).await?;

    tracing::info!(
        dimension_id = dimension.dimension_id,
        value = %dimension.value,
        "Created dimension"
    );

    Ok((StatusCode::CREATED, Json(dimension)))
}

/// Get a single dimension (GET /api/dimensions/{id}).
pub async fn get_dimension(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Dimension>, AppError> {
    state
        .dimensions
        .get_dimension(id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "Dimension",
                id: id.to_string(),
            }
            .into()
        })
}

/// Update a dimension (PUT /api/dimensions/{id}).
pub async fn update_dimension(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DimensionForm>,
) -> Result<Json<Dimension>, AppError> {
    validate_dimension_form(&form)?;

    let dimension = state.dimensions.update_dimension(id, &form).await?;

    tracing::info!(dimension_id = id, "Updated dimension");

    Ok(Json(dimension))
}

/// Delete a dimension and every bug reported against it (DELETE /api/dimensions/{id}).
///
/// Fails with 409 while an alarm is still scoped to it.
pub async fn delete_dimension(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.dimensions.delete_dimension(id).await?;

    tracing::info!(dimension_id = id, "Deleted dimension and its bugs");

    Ok(StatusCode::OK)
}
