//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the JSON error
//! bodies the API contract promises.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bistro_core::StoreError;

/// API errors with HTTP status code mapping.
///
/// The API has exactly two failure shapes: a missing item and a rejected
/// payload. Both are converted directly to an HTTP response; nothing is
/// retried or escalated.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No menu item with the requested id (404).
    #[error("menu item not found")]
    NotFound,

    /// The create/update payload violated one or more field rules (400).
    /// Carries every violated-rule message, not just the first.
    #[error("validation failed")]
    ValidationFailed(Vec<String>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                let body = serde_json::json!({ "error": "Menu item not found" });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            ApiError::ValidationFailed(messages) => {
                let body = serde_json::json!({
                    "error": "Validation failed",
                    "messages": messages,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ItemNotFound(_) => ApiError::NotFound,
        }
    }
}
