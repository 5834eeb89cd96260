//! Shared response envelope types for API handlers.
//!
//! Schema endpoints answer with a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "status": ..., "message": ... }` acknowledgement for writes that
/// return no record.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}
