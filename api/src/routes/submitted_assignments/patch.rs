use crate::response::{MessageResponse, UpdateAck};
use crate::routes::submitted_assignments::common::GradeRequest;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::submitted_assignment::Model as SubmissionModel;
use tracing::error;

/// PATCH /submittedassignments/{id}
///
/// Writes the grading fields (`status`, `givenMark`, `feedback`) onto the
/// submission. There is no existence or permission check: grading an
/// unknown id succeeds with `matchedCount: 0`, and the ack mirrors how
/// many rows the id matched.
///
/// ### Response
/// - `200 OK`
/// ```json
/// { "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 }
/// ```
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<GradeRequest>,
) -> impl IntoResponse {
    match SubmissionModel::grade(app_state.db(), id, req.status, req.given_mark, req.feedback).await
    {
        Ok(matched) => (StatusCode::OK, Json(UpdateAck::new(matched, matched))).into_response(),
        Err(err) => {
            error!(error = %err, id, "Failed to grade submission");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to grade submission")),
            )
                .into_response()
        }
    }
}
