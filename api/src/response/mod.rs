use serde::Serialize;

/// Acknowledgement returned by single-row inserts.
///
/// ```json
/// {
///   "acknowledged": true,
///   "insertedId": 17
/// }
/// ```
#[derive(Serialize)]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: i64,
}

impl InsertAck {
    pub fn new(inserted_id: i64) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgement returned by updates, reporting how many rows the id
/// matched and how many were written.
///
/// ```json
/// {
///   "acknowledged": true,
///   "matchedCount": 1,
///   "modifiedCount": 1
/// }
/// ```
#[derive(Serialize)]
pub struct UpdateAck {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

/// Acknowledgement returned by deletes.
#[derive(Serialize)]
pub struct DeleteAck {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Acknowledgement returned by the credential endpoints.
#[derive(Serialize)]
pub struct AuthAck {
    pub success: bool,
}

impl AuthAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error body carrying a single human-readable message.
///
/// ```json
/// {
///   "message": "Assignment not found"
/// }
/// ```
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
