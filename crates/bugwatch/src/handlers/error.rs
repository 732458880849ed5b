use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bugwatch_core::cloudwatch::PublishError;
use bugwatch_core::storage::{repository_error_to_status_code, RepositoryError};
use bugwatch_core::validation::ValidationError;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(validation) = self.0.downcast_ref::<ValidationError>() {
            return (StatusCode::BAD_REQUEST, Json(validation.clone())).into_response();
        }

        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<PublishError>().is_some() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_json_400() {
        let error = AppError::from(ValidationError::new("name", "required", "This field is required."));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["code"], "required");
    }

    #[tokio::test]
    async fn test_repository_error_uses_mapped_status() {
        let error = AppError::from(RepositoryError::InUse {
            entity_type: "Dimension",
            id: "4".to_string(),
            referenced_by: "AlarmDimension",
        });

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_string(response).await,
            "Dimension 4 is still referenced by AlarmDimension"
        );
    }

    #[tokio::test]
    async fn test_publish_error_is_bad_gateway() {
        let error = AppError::from(PublishError::Transport("timeout".to_string()));

        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let error = AppError(anyhow::anyhow!("boom"));

        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
