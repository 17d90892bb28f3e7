//! Router-level tests driving the full middleware chain with `oneshot` requests.

mod dance_class;
mod dancer;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::{cookie::Key, MemoryStore};

use crate::server::{
    middleware::auth::AuthGate,
    router::{router, RouterConfig},
    state::AppState,
};

/// Builds the application router over fresh dance tables.
async fn app(auth_gate: AuthGate) -> (TestContext, Router) {
    let test = TestBuilder::new().with_dance_tables().build().await.unwrap();
    let db = test.connection();

    let state = AppState::new(db, reqwest::Client::new(), None, auth_gate);
    let config = RouterConfig {
        session_key: Key::generate(),
        secure_cookies: false,
        cors_origins: None,
    };

    (test, router(state, MemoryStore::default(), config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Sends a body as-is, with an optional content type.
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    let request = request.body(Body::from(body.to_string())).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Posts a GraphQL query and returns the decoded response body.
async fn graphql(app: &Router, query: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/graphql",
        Some(serde_json::json!({ "query": query })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    json_body(response).await
}
