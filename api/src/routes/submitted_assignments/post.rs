use crate::response::{InsertAck, MessageResponse};
use crate::routes::submitted_assignments::common::SubmissionRequest;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::submitted_assignment::{Model as SubmissionModel, NewSubmission};
use tracing::error;

pub async fn submit_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> impl IntoResponse {
    let submission = NewSubmission {
        assignment_id: req.assignment_id,
        title: req.title,
        marks: req.marks,
        pdf_url: req.pdf_url,
        note: req.note,
        examinee_name: req.examinee_name,
        email: req.email,
        status: req.status,
    };

    match SubmissionModel::create(app_state.db(), submission).await {
        Ok(created) => (StatusCode::OK, Json(InsertAck::new(created.id))).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to store submission");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to store submission")),
            )
                .into_response()
        }
    }
}
