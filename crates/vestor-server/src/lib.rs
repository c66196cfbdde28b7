//! # vestor-server
//!
//! Axum HTTP server for the SmartVestor advisory service. Exposes the
//! recommend, assistant, auth, and plan endpoints and serves a prebuilt
//! frontend from `static/` when present. The router is built here so
//! integration tests can drive it without binding a socket.

pub mod auth_layer;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::services::ServeDir;

use crate::handlers::{
    ai_assistant, google_demo, health, list_plans, login, me, recommend, register, save_plan,
};
use crate::state::AppState;

/// Build the application router over shared state.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/plans", post(save_plan).get(list_plans))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_layer::require_auth,
        ));

    Router::new()
        .route("/api/health", get(health))
        .route("/api/recommend", post(recommend))
        .route("/api/ai-assistant", post(ai_assistant))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/google-demo", post(google_demo))
        .merge(protected)
        // Frontend build, when present
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}
