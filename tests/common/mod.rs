//! Common test utilities and helpers

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use notekeeper_core::{
    api::{build_router, ApiServerConfig, AppState},
    NoteStore,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router backed by a fresh store (API only, no static client), plus a
/// handle to that store
pub fn create_test_app() -> (Router, Arc<NoteStore>) {
    let store = Arc::new(NoteStore::new());
    let state = AppState {
        store: store.clone(),
    };
    let config = ApiServerConfig {
        static_dir: None,
        ..Default::default()
    };
    let router = build_router(state, &config);
    (router, store)
}

/// Send one request through the router and decode the JSON body (if any)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

/// Send a prebuilt request
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    if bytes.is_empty() {
        (status, None)
    } else {
        let json = serde_json::from_slice(&bytes).expect("Response is not JSON");
        (status, Some(json))
    }
}
