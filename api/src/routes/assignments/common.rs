//! # Assignment Request DTOs
//!
//! Payloads for creating, updating and deleting an assignment. Every field
//! is optional: the store accepts whatever subset the caller provides.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    pub title: Option<String>,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: Option<String>,
    pub marks: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "difficultyLevel")]
    pub difficulty_level: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    pub email: Option<String>,
}

/// Body of a delete request: the caller's claimed identity, compared to the
/// stored creator email.
#[derive(Debug, Deserialize)]
pub struct DeleteAssignmentRequest {
    pub email: Option<String>,
}
