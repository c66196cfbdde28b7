//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vestor_auth::Claims;
use vestor_core::{AdviceRequest, Language, generate, respond};
use vestor_store::{AdviceSession, NewUser, SavedPlan, StoredUser};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserPublic {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&StoredUser> for UserPublic {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserPublic,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserPublic,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssistantRequest {
    pub question: String,
    pub language: String,
}

impl Default for AssistantRequest {
    fn default() -> Self {
        Self {
            question: String::new(),
            // The assistant historically defaults to hinglish, unlike
            // recommend which defaults to en
            language: "hinglish".into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
    pub language: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SavePlanRequest {
    pub title: String,
    pub record: Option<serde_json::Value>,
}

impl Default for SavePlanRequest {
    fn default() -> Self {
        Self {
            title: "My Plan".into(),
            record: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub plans: Vec<SavedPlan>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        name: "SmartVestor",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Generate advice and persist the session
pub async fn recommend(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceSession>, ApiError> {
    let advice = generate(&payload);
    let session = AdviceSession::new(payload, advice);
    let stored = state.store.record_session(session)?;
    Ok(Json(stored))
}

/// Canned-answer assistant
pub async fn ai_assistant(
    Json(payload): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    if payload.question.trim().is_empty() {
        return Err(ApiError::Validation("Question is required".into()));
    }

    let answer = respond(&payload.question, Language::parse(&payload.language));

    Ok(Json(AssistantResponse {
        question: payload.question,
        answer: answer.to_string(),
        timestamp: Utc::now(),
        language: payload.language,
    }))
}

/// Register a new account and sign the first token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("Email and password required".into()));
    }

    let password_hash = state.auth.hash_password(&payload.password)?;
    let user = state.store.create_user(NewUser {
        name: payload.name,
        email: payload.email,
        password_hash,
    })?;

    tracing::info!(user = %user.id, "registered user");

    let token = state
        .auth
        .issue_token(user.id.as_str(), &user.email, &user.name)?;
    Ok(Json(AuthResponse {
        token,
        user: UserPublic::from(&user),
    }))
}

/// Exchange credentials for a token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_email(&payload.email)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".into()))?;

    state
        .auth
        .verify_password(&payload.password, &user.password_hash)?;

    let token = state
        .auth
        .issue_token(user.id.as_str(), &user.email, &user.name)?;
    Ok(Json(AuthResponse {
        token,
        user: UserPublic::from(&user),
    }))
}

/// Identity of the calling token
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserPublic {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
        },
    })
}

/// Demo sign-in without OAuth: the fixed demo account is created on first
/// use, then gets a normal token.
pub async fn google_demo(State(state): State<AppState>) -> Result<Json<AuthResponse>, ApiError> {
    const DEMO_EMAIL: &str = "demo.google.user@example.com";

    let user = match state.store.find_user_by_email(DEMO_EMAIL)? {
        Some(user) => user,
        None => {
            let password_hash = state.auth.hash_password("google_demo")?;
            state.store.create_user(NewUser {
                name: "Google Demo User".into(),
                email: DEMO_EMAIL.into(),
                password_hash,
            })?
        }
    };

    let token = state
        .auth
        .issue_token(user.id.as_str(), &user.email, &user.name)?;
    Ok(Json(AuthResponse {
        token,
        user: UserPublic::from(&user),
    }))
}

/// Save a previously generated advice record under a title
pub async fn save_plan(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SavePlanRequest>,
) -> Result<Json<SavedPlan>, ApiError> {
    let record = payload
        .record
        .filter(|record| record.get("advice").is_some_and(|advice| !advice.is_null()))
        .ok_or_else(|| ApiError::Validation("Invalid plan".into()))?;

    let plan = SavedPlan::new(claims.sub, payload.title, record);
    let stored = state.store.save_plan(plan)?;
    Ok(Json(stored))
}

/// Plans owned by the calling user
pub async fn list_plans(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PlansResponse>, ApiError> {
    let plans = state.store.plans_for_user(&claims.sub)?;
    Ok(Json(PlansResponse { plans }))
}
