use axum::{extract::Path, Json};

use bugwatch_core::admin::{find_model, ModelAdmin, REGISTRY};
use bugwatch_core::storage::RepositoryError;

use crate::handlers::error::AppError;

/// List every registered model's admin settings (GET /api/admin/models).
pub async fn list_models() -> Json<&'static [ModelAdmin]> {
    Json(REGISTRY)
}

/// Get one model's admin settings by name (GET /api/admin/models/{name}).
pub async fn get_model(Path(name): Path<String>) -> Result<Json<&'static ModelAdmin>, AppError> {
    find_model(&name).map(Json).ok_or_else(|| {
        RepositoryError::NotFound {
            entity_type: "ModelAdmin",
            id: name,
        }
        .into()
    })
}
