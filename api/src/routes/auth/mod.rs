use crate::state::AppState;
use axum::{Router, routing::post};
use post::{issue_token, logout};

pub mod post;

/// Builds the credential route group: `POST /jwt` and `POST /logout`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", post(logout))
}
