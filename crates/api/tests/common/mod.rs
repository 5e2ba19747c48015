#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::{ServerConfig, StorageBackend};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::repositories::TodoRepository;

pub const TODOS: &str = "/api/todos";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        storage: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over `repo`, with the same middleware
/// stack production uses.
pub fn build_test_app(repo: Arc<dyn TodoRepository>) -> Router {
    build_app_router(AppState::new(repo), &test_config())
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, Some("application/json"), &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an arbitrary request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Messages of every error entry reported against `field`.
pub fn field_messages(json: &serde_json::Value, field: &str) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors should be an array")
        .iter()
        .filter(|e| e["field"] == field)
        .map(|e| e["message"].as_str().unwrap_or_default().to_string())
        .collect()
}
