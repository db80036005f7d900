//! # Submission Request DTOs

use serde::Deserialize;

/// Payload of a new submission. Stored as sent; the grading fields are
/// written later through the PATCH route.
#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "assignmentId")]
    pub assignment_id: Option<i64>,
    pub title: Option<String>,
    pub marks: Option<i32>,
    #[serde(rename = "pdfURL")]
    pub pdf_url: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "examineeName")]
    pub examinee_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Grading payload applied by the PATCH route.
#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub status: Option<String>,
    #[serde(rename = "givenMark")]
    pub given_mark: Option<i32>,
    pub feedback: Option<String>,
}

/// Query parameters accepted by the list route.
#[derive(Debug, Deserialize)]
pub struct SubmissionFilter {
    pub email: Option<String>,
}
