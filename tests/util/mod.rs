use agape::server::{model::app::AppState, router, service::seed::plan::SeedPlan};
use agape_test_utils::TestSetup;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Router over the test store, seed runs use the small plan.
pub fn app(test: &TestSetup) -> Router {
    let state = AppState {
        seed_plan: SeedPlan::small(),
        ..test.state::<AppState>()
    };

    router::routes().with_state(state)
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri, Body::empty())
}

pub fn delete(uri: &str) -> Request<Body> {
    request(Method::DELETE, uri, Body::empty())
}

pub fn json(method: Method, uri: &str, body: Value) -> Request<Body> {
    raw_json(method, uri, body.to_string())
}

/// Request with a JSON content type and an arbitrary, possibly malformed, body
pub fn raw_json(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("valid request")
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .expect("valid request")
}

/// Send a request through the router, returning the status and the raw body text
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    (status, String::from_utf8(bytes.to_vec()).expect("UTF-8 body"))
}

/// Send a request through the router, returning the status and the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, request).await;
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).expect("JSON body")
    };

    (status, body)
}
