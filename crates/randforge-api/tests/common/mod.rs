//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use randforge_core::engine::Engine;
use randforge_engines::{AnyEngine, EngineKind};
use randforge_test_support::ScriptedEngine;
use tower::ServiceExt;

use randforge_api::state::AppState;

/// Build the full app router around `engine`. Uses the same route structure
/// as `main.rs`.
pub fn build_test_app_with_engine(engine: impl Engine + Send + 'static) -> Router {
    randforge_api::app(AppState::new(engine))
}

/// Build the full app router with a scripted engine for tests that need
/// exact draws.
pub fn build_test_app_with_words(words: Vec<u64>) -> Router {
    build_test_app_with_engine(ScriptedEngine::new(words))
}

/// Build the full app router with a seeded default engine.
pub fn build_test_app() -> Router {
    build_test_app_with_engine(AnyEngine::from_seed_str(EngineKind::default(), "api tests"))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
