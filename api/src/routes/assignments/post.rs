use crate::response::{InsertAck, MessageResponse};
use crate::routes::assignments::common::AssignmentRequest;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::assignment::Model as AssignmentModel;
use tracing::error;

pub async fn create_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<AssignmentRequest>,
) -> impl IntoResponse {
    match AssignmentModel::create(
        app_state.db(),
        req.title,
        req.thumbnail_url,
        req.marks,
        req.description,
        req.difficulty_level,
        req.due_date,
        req.email,
    )
    .await
    {
        Ok(assignment) => (StatusCode::OK, Json(InsertAck::new(assignment.id))).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to create assignment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to create assignment")),
            )
                .into_response()
        }
    }
}
