use crate::response::{DeleteAck, MessageResponse};
use crate::routes::assignments::common::DeleteAssignmentRequest;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use tracing::error;

/// DELETE /assignments/{id}
///
/// Deletes the assignment when the `email` in the request body equals the
/// stored creator email. The identity is taken from the body, not from a
/// verified credential; see `routes::routes` for why the guard is not
/// mounted here.
///
/// # Responses
/// - `200 OK`: `{ "acknowledged": true, "deletedCount": 1 }`
/// - `404 NOT FOUND`: `{ "message": "Assignment not found" }`
/// - `403 FORBIDDEN`: body email is not the creator's.
/// - `500 INTERNAL SERVER ERROR`: database error.
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<DeleteAssignmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let assignment = match AssignmentModel::get_by_id(db, id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Assignment not found")),
            )
                .into_response();
        }
        Err(err) => {
            error!(error = %err, id, "Failed to fetch assignment for delete");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to delete assignment")),
            )
                .into_response();
        }
    };

    if assignment.email != req.email {
        return (
            StatusCode::FORBIDDEN,
            Json(MessageResponse::new(
                "Unauthorized: You are not the creator of this assignment",
            )),
        )
            .into_response();
    }

    match AssignmentModel::delete(db, id).await {
        Ok(deleted_count) => (StatusCode::OK, Json(DeleteAck::new(deleted_count))).into_response(),
        Err(err) => {
            error!(error = %err, id, "Failed to delete assignment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to delete assignment")),
            )
                .into_response()
        }
    }
}
