mod helpers;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    middleware::from_fn,
    routing::get,
};
use chrono::{Duration, Utc};
use common::config::Config;
use helpers::app::{init_test_config, make_test_app};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

use api::auth::guards::verify_token;

/// Minimal route sitting behind the credential guard, used to exercise
/// verification end to end. The public routes do not mount the guard, so
/// the tests bring their own protected endpoint.
fn guarded_probe() -> Router {
    Router::new()
        .route("/probe", get(|| async { "ok" }))
        .layer(from_fn(verify_token))
}

async fn issue_cookie(app: &Router, user: Value) -> String {
    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&user).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header should be present")
        .to_str()
        .unwrap()
        .to_string();

    set_cookie
}

/// First `name=value` pair of a Set-Cookie line.
fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap()
}

async fn probe_with_cookie(cookie: Option<&str>) -> StatusCode {
    let probe = guarded_probe();

    let builder = Request::builder().method("GET").uri("/probe");
    let request = match cookie {
        Some(pair) => builder.header(header::COOKIE, pair).body(Body::empty()),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    probe.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn issue_token_sets_credential_cookie() {
    let app = make_test_app().await;

    let set_cookie = issue_cookie(&app, json!({ "email": "alice@example.com" })).await;

    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("SameSite=None"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn issue_token_acknowledges_with_success() {
    let app = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "email": "alice@example.com" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "success": true }));
}

#[tokio::test]
async fn issued_cookie_passes_the_guard() {
    let app = make_test_app().await;

    let set_cookie = issue_cookie(&app, json!({ "email": "alice@example.com" })).await;
    let status = probe_with_cookie(Some(cookie_pair(&set_cookie))).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_cookie_is_rejected() {
    init_test_config();

    let probe = guarded_probe();
    let req = Request::builder()
        .method("GET")
        .uri("/probe")
        .body(Body::empty())
        .unwrap();

    let response = probe.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "unauthorized access");
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = make_test_app().await;

    let set_cookie = issue_cookie(&app, json!({ "email": "alice@example.com" })).await;
    let tampered = format!("{}x", cookie_pair(&set_cookie));

    let status = probe_with_cookie(Some(&tampered)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    init_test_config();

    // Signed with the right secret but already two hours stale, well past
    // the decoder's leeway.
    let exp = (Utc::now() - Duration::hours(2)).timestamp();
    let claims = json!({ "email": "alice@example.com", "exp": exp });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(Config::get().jwt_secret.as_bytes()),
    )
    .unwrap();

    let pair = format!("token={token}");
    let status = probe_with_cookie(Some(&pair)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let app = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/logout")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header should be present")
        .to_str()
        .unwrap();

    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "success": true }));

    // A client that honours the removal no longer reaches guarded routes.
    let status = probe_with_cookie(None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
