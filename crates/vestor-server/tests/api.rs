//! API integration tests driving the router directly.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use vestor_auth::AuthService;
use vestor_server::app_router;
use vestor_server::state::AppState;
use vestor_store::MemoryStore;

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        auth: Arc::new(AuthService::new(b"test_secret")),
    };
    app_router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"name": name, "email": email, "password": password})),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["name"], "SmartVestor");
}

#[tokio::test]
async fn recommend_end_to_end() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/recommend",
        None,
        Some(json!({
            "goals": "buy a house",
            "budget": 10000,
            "risk": "high",
            "currency": "INR",
            "language": "hinglish"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());

    let advice = &body["advice"];
    assert_eq!(advice["allocations"]["stocks"], 4500);
    assert_eq!(advice["allocations"]["mutualFunds"], 2000);
    assert_eq!(advice["allocations"]["etfs"], 1500);
    assert_eq!(advice["allocations"]["crypto"], 1500);
    assert_eq!(advice["allocations"]["realEstate"], 500);
    assert_eq!(advice["currency"], "INR");
    assert_eq!(advice["currencySymbol"], "₹");
    assert_eq!(
        advice["recommendations"]["crypto"]["amount"],
        advice["allocations"]["crypto"]
    );
}

#[tokio::test]
async fn recommend_coerces_malformed_input() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/recommend",
        None,
        Some(json!({"budget": "not a number", "risk": "extreme", "language": "xx"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let advice = &body["advice"];
    assert_eq!(advice["inputs"]["monthlyBudget"], 0.0);
    assert_eq!(advice["inputs"]["risk"], "medium");
    assert_eq!(advice["inputs"]["language"], "en");
    assert_eq!(advice["currency"], "USD");
    assert_eq!(advice["currencySymbol"], "$");
}

#[tokio::test]
async fn register_login_me_flow() {
    let app = test_app();

    let (status, body) = register(&app, "Asha", "asha@example.com", "s3cret").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "asha@example.com");

    // Wrong password
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "asha@example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correct credentials
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "asha@example.com", "password": "s3cret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Asha");
    assert_eq!(body["user"]["email"], "asha@example.com");
}

#[tokio::test]
async fn registration_requires_email_and_password() {
    let app = test_app();
    let (status, _) = register(&app, "Asha", "", "s3cret").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = register(&app, "Asha", "asha@example.com", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_registration_conflicts_ignoring_case() {
    let app = test_app();
    let (status, _) = register(&app, "Asha", "asha@example.com", "s3cret").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = register(&app, "Asha", "Asha@Example.COM", "s3cret").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_bad_tokens() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/plans", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn plan_save_and_list_round_trip() {
    let app = test_app();
    let (_, body) = register(&app, "Asha", "asha@example.com", "s3cret").await;
    let token = body["token"].as_str().unwrap().to_string();

    // Generate a record worth saving
    let (_, record) = send(
        &app,
        Method::POST,
        "/api/recommend",
        None,
        Some(json!({"budget": 10000, "risk": "high", "currency": "INR", "language": "hinglish"})),
    )
    .await;

    // A plan without an advice payload is invalid
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/plans",
        Some(&token),
        Some(json!({"title": "Broken", "record": {"input": {}}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, saved) = send(
        &app,
        Method::POST,
        "/api/plans",
        Some(&token),
        Some(json!({"title": "Retirement", "record": record})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["title"], "Retirement");

    let (status, body) = send(&app, Method::GET, "/api/plans", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["record"]["advice"], record["advice"]);

    // Another user sees none of them
    let (_, body) = register(&app, "Ravi", "ravi@example.com", "s3cret").await;
    let other = body["token"].as_str().unwrap().to_string();
    let (_, body) = send(&app, Method::GET, "/api/plans", Some(&other), None).await;
    assert!(body["plans"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn assistant_requires_a_question() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/ai-assistant",
        None,
        Some(json!({"language": "en"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assistant_answers_and_pins_priority() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ai-assistant",
        None,
        Some(json!({"question": "What is SIP?", "language": "en"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "What is SIP?");
    assert!(body["timestamp"].is_string());
    let answer = body["answer"].as_str().unwrap();
    assert!(answer.starts_with("SIP (Systematic Investment Plan)"));

    // "sip" outranks "tax" in the rule order
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/ai-assistant",
        None,
        Some(json!({"question": "sip tax benefits", "language": "en"})),
    )
    .await;
    assert!(
        body["answer"]
            .as_str()
            .unwrap()
            .starts_with("SIP (Systematic Investment Plan)")
    );
}

#[tokio::test]
async fn assistant_defaults_to_hinglish() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ai-assistant",
        None,
        Some(json!({"question": "asdkjhasd"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "hinglish");
    assert!(
        body["answer"]
            .as_str()
            .unwrap()
            .starts_with("Main aapka SmartVestor AI assistant hun!")
    );
}
