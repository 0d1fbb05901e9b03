//! Uniform JSON response wrapper.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::errors::messages;

/// Body of every API response.
///
/// ```json
/// { "status": 201, "message": "success", "data": { "id": 4 } }
/// ```
///
/// `status` mirrors the HTTP status code. `data` is omitted when there is
/// nothing to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: messages::SUCCESS.to_string(),
            data: Some(data),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Envelope<()> {
    /// Response without a payload.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
