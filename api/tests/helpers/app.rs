use api::routes::routes;
use api::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::config::Config;
use db::test_utils::setup_test_db;
use serde_json::Value;
use tower::ServiceExt;

/// Loads deterministic test configuration. Safe to call more than once;
/// only the first call wins.
pub fn init_test_config() {
    Config::init(".env.test");
}

/// Builds the full router over a fresh in-memory database, so each test
/// starts from an empty store.
pub async fn make_test_app() -> Router {
    init_test_config();

    let db = setup_test_db().await;
    let app_state = AppState::new(db);

    routes(app_state)
}

/// Sends one request and returns the status with the parsed JSON body.
/// A body that is not JSON comes back as `Value::Null`.
pub async fn send_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
