use crate::state::AppState;
use axum::{Router, response::IntoResponse, routing::get};

/// Builds the root route group.
///
/// This includes a single `GET /` endpoint that returns a plain liveness
/// string. Useful for uptime checks, load balancers, or deployment health
/// monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /
///
/// Returns a plaintext message to indicate the API is running.
///
/// ### Response
/// - `200 OK` with body `Study Buddy server is running`
async fn health_check() -> impl IntoResponse {
    "Study Buddy server is running"
}
