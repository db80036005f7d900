use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_assignment;
use get::{get_assignment, get_assignments};
use post::create_assignment;
use put::edit_assignment;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/assignments` route group.
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_assignments))
        .route("/", post(create_assignment))
        .route("/{id}", get(get_assignment))
        .route("/{id}", put(edit_assignment))
        .route("/{id}", delete(delete_assignment))
}
