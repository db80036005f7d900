use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};
use get::get_submitted_assignments;
use patch::grade_submission;
use post::submit_assignment;

pub mod common;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/submittedassignments` route group.
pub fn submitted_assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_submitted_assignments))
        .route("/", post(submit_assignment))
        .route("/{id}", patch(grade_submission))
}
