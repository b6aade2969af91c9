#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use quotes_server::{api::app_router, build_state, config::Config};

pub const SECRET: &str = "test-secret";

/// Router backed by a file store in a private temp directory.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("quotes.json")
    }
}

pub fn config_for(data_file: &Path, key: Option<&str>) -> Config {
    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("DB_URI", format!("file://{}", data_file.display()));
    if let Some(key) = key {
        vars.insert("AUTHORIZATION_KEY", key.to_string());
    }
    Config::from_lookup(|k| vars.get(k).cloned()).unwrap()
}

pub async fn build_test_app(key: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    build_test_app_in(dir, key).await
}

/// Like `build_test_app`, for a directory that may already contain data.
pub async fn build_test_app_in(dir: TempDir, key: Option<&str>) -> TestApp {
    let config = config_for(&dir.path().join("quotes.json"), key);
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        dir,
    }
}

pub async fn send(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, headers, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn write(method: Method, uri: &str, key: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = key {
        builder = builder.header(header::AUTHORIZATION, key);
    }
    builder.body(body.into()).unwrap()
}

pub fn post_json(uri: &str, key: Option<&str>, body: &Value) -> Request<Body> {
    write(Method::POST, uri, key, body.to_string())
}

pub fn put_json(uri: &str, key: Option<&str>, body: &Value) -> Request<Body> {
    write(Method::PUT, uri, key, body.to_string())
}
