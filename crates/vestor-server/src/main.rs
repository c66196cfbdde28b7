//! SmartVestor HTTP Server
//!
//! Axum-based server wiring the advice engine, the JSON file store, and
//! the auth service behind the REST API.

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vestor_auth::AuthService;
use vestor_server::app_router;
use vestor_server::config::ServerConfig;
use vestor_server::state::AppState;
use vestor_store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    // Open the record store
    let store = Arc::new(JsonFileStore::open(&config.data_file)?);
    tracing::info!("✓ Store ready at {}", config.data_file.display());

    // Token/credential service
    if std::env::var("JWT_SECRET").is_err() {
        tracing::warn!("⚠ JWT_SECRET not set - using the development secret");
    }
    let auth = Arc::new(AuthService::from_env());

    // Build application state
    let state = AppState { store, auth };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 SmartVestor server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health            - Health check");
    tracing::info!("  POST /api/recommend         - Generate an advice document");
    tracing::info!("  POST /api/ai-assistant      - Canned-answer assistant");
    tracing::info!("  POST /api/auth/register     - Create an account");
    tracing::info!("  POST /api/auth/login        - Exchange credentials for a token");
    tracing::info!("  POST /api/auth/google-demo  - Demo sign-in");
    tracing::info!("  GET  /api/auth/me           - Token identity (bearer)");
    tracing::info!("  POST /api/plans             - Save a plan (bearer)");
    tracing::info!("  GET  /api/plans             - List saved plans (bearer)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
