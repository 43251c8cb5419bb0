#![allow(dead_code)]

use std::sync::Arc;

use adapter::database::{connect_database_with, migrate};
use api::route::build_routers;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use registry::{AppRegistry, AppRegistryImpl};
use serde_json::Value;
use shared::config::DatabaseConfig;
use tower::ServiceExt;

/// Builds the full router over a freshly migrated in-memory store.
pub async fn make_app() -> anyhow::Result<Router> {
    let pool = connect_database_with(&DatabaseConfig::in_memory())?;
    migrate(&pool).await?;
    let registry: AppRegistry = Arc::new(AppRegistryImpl::new(pool));
    Ok(build_routers().with_state(registry))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let body = match body {
        Some(v) => Body::from(serde_json::to_vec(&v)?),
        None => Body::empty(),
    };
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body)?;

    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::DELETE, uri, None).await
}
