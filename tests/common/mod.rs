// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use fittrack::config::Config;
use fittrack::routes::create_router;
use fittrack::store::MemoryStore;
use fittrack::AppState;
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with a fresh store and a known signing key.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = MemoryStore::new();

    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}

/// Create a test session token (mirrors middleware/auth.rs logic).
#[allow(dead_code)]
pub fn create_test_jwt(username: &str, signing_key: &[u8]) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        exp: usize,
        iat: usize,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        sub: username.to_string(),
        exp: now + 86400,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}

/// POST a JSON body to the app.
#[allow(dead_code)]
pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// GET a route, optionally with a bearer token.
#[allow(dead_code)]
pub async fn get_route(app: &axum::Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Deserialize a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API with fixed vitals
/// (age 30, female, 165 cm, 60 kg).
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, username: &str) {
    let response = post_json(
        app,
        "/register",
        None,
        serde_json::json!({
            "username": username,
            "password": "password123",
            "name": "Test User",
            "age": 30,
            "gender": "female",
            "height": 165,
            "weight": 60
        }),
    )
    .await;

    assert!(response.status().is_success(), "registration failed");
}
