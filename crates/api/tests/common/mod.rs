#![allow(dead_code)]

use std::fs;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use cadastro_api::config::{LogFormat, ServerConfig};
use cadastro_api::router::build_app_router;
use cadastro_api::state::AppState;

pub const INDEX_HTML: &str = "<!doctype html><title>Cadastro</title>";
pub const ROBOTS_TXT: &str = "User-agent: *\n";

/// Date every test app treats as "today".
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Router plus the temporary frontend bundle it serves from.
///
/// The bundle is deleted when this value is dropped, so keep it alive for
/// the whole test.
pub struct TestApp {
    router: Router,
    _bundle: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` pointing at `bundle`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(bundle: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: bundle.path().join("dist"),
        public_dir: bundle.path().join("public"),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, a
/// throwaway frontend bundle and a pinned clock.
pub fn build_test_app() -> TestApp {
    let bundle = tempfile::tempdir().unwrap();
    fs::create_dir_all(bundle.path().join("dist")).unwrap();
    fs::create_dir_all(bundle.path().join("public")).unwrap();
    fs::write(bundle.path().join("dist/index.html"), INDEX_HTML).unwrap();
    fs::write(bundle.path().join("public/robots.txt"), ROBOTS_TXT).unwrap();

    let state = AppState::new(test_config(&bundle)).with_clock(fixed_today);

    TestApp {
        router: build_app_router(state),
        _bundle: bundle,
    }
}

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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    send(app, builder.body(body.into()).unwrap()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
