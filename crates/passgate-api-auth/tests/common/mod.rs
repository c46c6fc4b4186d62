//! Test helpers for passgate-api-auth integration tests.
//!
//! Builds the real router over the in-memory store with a low-cost hasher.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Duration;
use passgate_api_auth::{auth_router, AuthService, AuthState, InMemoryUserStore};
use passgate_auth::{PasswordHasher, SigningSecret, TokenAuthority};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Signing secret shared by every test router.
pub const TEST_SECRET: &str = "integration-test-secret-of-32-bytes";

pub fn test_secret() -> SigningSecret {
    SigningSecret::from(TEST_SECRET)
}

/// Router plus the authority it verifies with.
pub struct TestApp {
    pub router: Router,
    pub authority: Arc<TokenAuthority>,
}

/// Create a router with a one-hour token lifetime.
pub fn create_test_app() -> TestApp {
    create_test_app_with_ttl(Duration::hours(1))
}

pub fn create_test_app_with_ttl(ttl: Duration) -> TestApp {
    let authority = Arc::new(TokenAuthority::new(test_secret(), ttl).unwrap());
    let hasher = PasswordHasher::with_params(4096, 1, 1).unwrap();
    let service = AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        hasher,
        Arc::clone(&authority),
    )
    .unwrap();

    TestApp {
        router: auth_router(AuthState::new(Arc::new(service))),
        authority,
    }
}

/// Send one request and return status, headers and JSON body (`Null` if empty).
pub async fn send(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_with_auth(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Register a user and return the response body.
pub async fn register(router: &Router, name: &str, email: &str, password: &str) -> Value {
    let body = serde_json::json!({"name": name, "email": email, "password": password});
    let (status, _, body) = send(router, post_json("/register", &body)).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body
}

/// Log in and return the issued token.
pub async fn login(router: &Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({"email": email, "password": password});
    let (status, _, body) = send(router, post_json("/login", &body)).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}
