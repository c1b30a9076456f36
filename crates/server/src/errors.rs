use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Transport wrapper for service failures. Validation errors carry the form's
/// user-facing sentence verbatim; storage failures become an opaque 500.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"message": msg}))).into_response()
            }
            ServiceError::Storage(msg) => {
                error!(error = %msg, "form submission failed to persist");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"message": "Internal server error."})),
                )
                    .into_response()
            }
        }
    }
}
