#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use scriptbox_core::clock::ManualClock;
use scriptbox_core::store::ScriptStore;
use tower::ServiceExt;

use scriptbox_api::config::ServerConfig;
use scriptbox_api::router::build_app_router;
use scriptbox_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        sweep_interval_secs: 0,
        shutdown_timeout_secs: 5,
    }
}

/// Build the full application router around a fresh wall-clock store.
///
/// The store is returned too so tests can inspect it directly.
pub fn build_test_app() -> (Router, Arc<ScriptStore>) {
    build_app_with_store(Arc::new(ScriptStore::new()))
}

/// Same as [`build_test_app`] but with time under test control.
pub fn build_test_app_with_clock(clock: Arc<ManualClock>) -> (Router, Arc<ScriptStore>) {
    build_app_with_store(Arc::new(ScriptStore::with_clock(clock)))
}

fn build_app_with_store(store: Arc<ScriptStore>) -> (Router, Arc<ScriptStore>) {
    let config = test_config();
    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Submit a script through the API and return its id.
pub async fn submit(app: Router, script: &str, player: Option<&str>) -> String {
    let mut body = serde_json::json!({ "script": script });
    if let Some(p) = player {
        body["player"] = serde_json::Value::from(p);
    }
    let response = post_json(app, "/execute", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["id"]
        .as_str()
        .expect("submit response must carry an id")
        .to_string()
}
