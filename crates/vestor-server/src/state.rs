//! Application State

use std::sync::Arc;

use vestor_auth::AuthService;
use vestor_store::AdviceStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Record store (JSON file in production, in-memory in tests)
    pub store: Arc<dyn AdviceStore>,

    /// Credential and token service
    pub auth: Arc<AuthService>,
}
