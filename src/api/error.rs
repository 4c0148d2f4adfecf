//! HTTP error responses for authentication and authorization failures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON body returned on 401/403 responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code: "unauthorized" or "forbidden"
    pub error: String,

    /// Human-readable message
    pub message: String,
}

/// Rejection type for the API's auth guards
///
/// Authentication failures map to 401, permission failures to 403. The two
/// are kept distinct: a valid caller with the wrong role is forbidden, not
/// unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
}

impl ApiError {
    /// Create a 401 rejection
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a 403 rejection
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, "unauthorized", message),
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, "forbidden", message),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
