use crate::response::MessageResponse;
use crate::routes::submitted_assignments::common::SubmissionFilter;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::submitted_assignment::Model as SubmissionModel;
use tracing::error;

/// GET /submittedassignments?email=...
///
/// Lists submissions as a bare JSON array, restricted to one submitter
/// when `email` is given. An empty `email` parameter means no filter.
pub async fn get_submitted_assignments(
    State(app_state): State<AppState>,
    Query(params): Query<SubmissionFilter>,
) -> impl IntoResponse {
    let email = params.email.filter(|e| !e.is_empty());

    match SubmissionModel::get_all(app_state.db(), email).await {
        Ok(submissions) => (StatusCode::OK, Json(submissions)).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to retrieve submissions");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to retrieve submissions")),
            )
                .into_response()
        }
    }
}
