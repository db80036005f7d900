use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use tracing::error;

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /assignments
///
/// Returns every assignment as a bare JSON array in storage order.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "Calculus worksheet",
///     "thumbnailURL": "https://img.example.com/calc.png",
///     "marks": 60,
///     "description": "Chain rule drills",
///     "difficultyLevel": "hard",
///     "dueDate": "2025-08-01",
///     "email": "alice@example.com"
///   }
/// ]
/// ```
pub async fn get_assignments(State(app_state): State<AppState>) -> impl IntoResponse {
    match AssignmentModel::get_all(app_state.db()).await {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to retrieve assignments");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to retrieve assignments")),
            )
                .into_response()
        }
    }
}

/// GET /assignments/{id}
///
/// Returns the matching assignment, or JSON `null` when the id resolves to
/// nothing. A miss on this route is not an error.
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match AssignmentModel::get_by_id(app_state.db(), id).await {
        Ok(assignment) => (StatusCode::OK, Json(assignment)).into_response(),
        Err(err) => {
            error!(error = %err, id, "Failed to retrieve assignment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to retrieve assignment")),
            )
                .into_response()
        }
    }
}
