#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use fitness_db::DatabaseConfig;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fitness_api::config::ServerConfig;
use fitness_api::router::build_app_router;
use fitness_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_title: "Fitness API".to_string(),
        api_version: "1.0.0".to_string(),
        debug: false,
        log_json: false,
        request_timeout_secs: 30,
        cors_origins: vec!["http://localhost:3000".to_string()],
        database: DatabaseConfig::default(),
        azure_subscription_id: String::new(),
        azure_resource_group: String::new(),
    }
}

/// Build the full application router, middleware included, from `config`.
pub fn build_app(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config.clone()), &config)
}

/// Build the full application router with [`test_config`].
pub fn build_test_app() -> Router {
    build_app(test_config())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PATCH, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
