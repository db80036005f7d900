mod helpers;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use helpers::app::make_test_app;
use tower::ServiceExt;

#[tokio::test]
async fn root_returns_liveness_text() {
    let app = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Study Buddy server is running");
}
