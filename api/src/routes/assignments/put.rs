//! Edit assignment handler.
//!
//! Only the creator may edit: the stored creator email must equal the email
//! in the request body.

use crate::response::{MessageResponse, UpdateAck};
use crate::routes::assignments::common::AssignmentRequest;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use tracing::error;

/// PUT /assignments/{id}
///
/// Replaces the assignment's payload fields. The record is fetched first;
/// the write only happens when the stored creator email matches the
/// `email` in the request body.
///
/// # Request Body
/// JSON matching `AssignmentRequest`. Fields left out are cleared:
/// ```json
/// {
///   "title": "Calculus worksheet v2",
///   "marks": 75,
///   "dueDate": "2025-08-15",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Responses
/// - `200 OK`: the id matched and the row was rewritten.
/// ```json
/// { "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 }
/// ```
/// - `404 NOT FOUND`: no assignment with this id.
/// ```json
/// { "message": "Assignment not found" }
/// ```
/// - `403 FORBIDDEN`: the body email does not equal the stored creator.
/// ```json
/// { "message": "Unauthorized: You are not the creator of this assignment" }
/// ```
/// - `500 INTERNAL SERVER ERROR`: database error.
pub async fn edit_assignment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AssignmentRequest>,
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
            error!(error = %err, id, "Failed to fetch assignment for update");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to update assignment")),
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

    match AssignmentModel::update(
        db,
        id,
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
        Ok(_) => (StatusCode::OK, Json(UpdateAck::new(1, 1))).into_response(),
        Err(err) => {
            error!(error = %err, id, "Failed to update assignment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to update assignment")),
            )
                .into_response()
        }
    }
}
