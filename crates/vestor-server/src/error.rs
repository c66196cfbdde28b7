//! API Error Taxonomy
//!
//! Every failure a handler can surface, mapped onto the four response
//! codes the API uses. The generator and responder never raise - errors
//! originate only here at the boundary (auth, storage, malformed request).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use vestor_auth::AuthError;
use vestor_store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing required field -> 400
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or missing/invalid/expired token -> 401
    #[error("{0}")]
    Unauthorized(String),

    /// Duplicate email -> 409
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure -> 500 with a generic message
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal(detail) => {
                // Log the detail, never leak it to the client
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => ApiError::Conflict("User already exists".into()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized("Invalid credentials".into()),
            AuthError::InvalidToken | AuthError::Expired => {
                ApiError::Unauthorized("Invalid token".into())
            }
            AuthError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}
