//! Bearer Token Middleware
//!
//! Validates the Authorization header on protected routes and makes the
//! token claims available to handlers through request extensions. Token
//! claims are the sole identity carried on a request - there is no
//! server-side session state.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header::AUTHORIZATION};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))?;

    let claims = state.auth.verify_token(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
