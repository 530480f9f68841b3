//! CoreError to HTTP response mapping
//!
//! The core reports error kinds; this boundary decides how they render.
//! Every failure becomes `{"error": "<human-readable reason>"}` with the
//! status code matching the kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::common::CoreError;

/// Newtype so handlers can use `?` on core results.
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Auth(_) | CoreError::SessionExpired => StatusCode::UNAUTHORIZED,
            CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Conflict(_) | CoreError::InvalidTransition { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
