#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const CATS: &str = "/api/1/cats";
pub const HORSES: &str = "/api/1/horses";

/// App backed by its own in-memory SQLite database.
pub async fn build_app() -> anyhow::Result<Router> {
    let cfg = AppConfig { database: DatabaseConfig::with_url("sqlite::memory:"), ..AppConfig::default() };
    server::build_app(&cfg).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn message(&self) -> String {
        self.json()["message"].as_str().unwrap_or_default().to_string()
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<TestResponse> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?.to_vec();
    Ok(TestResponse { status, body })
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, req).await
}

pub async fn send_empty(app: &Router, method: &str, uri: &str) -> anyhow::Result<TestResponse> {
    let req = Request::builder().method(method).uri(uri).body(Body::empty())?;
    send(app, req).await
}

/// POST a record and return the created body.
pub async fn create(app: &Router, base: &str, name: &str, description: &str) -> anyhow::Result<Value> {
    let resp = send_json(app, "POST", base, &serde_json::json!({"name": name, "description": description})).await?;
    assert_eq!(resp.status, StatusCode::CREATED);
    Ok(resp.json())
}
