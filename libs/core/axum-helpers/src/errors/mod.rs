pub mod handlers;
pub mod messages;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Envelope;

/// Application error type that renders as an [`Envelope`].
///
/// The `message` field of the envelope carries the error text as-is.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not Found")]
    NotFound,

    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::BadRequest(msg) => tracing::info!("Bad request: {}", msg),
            AppError::NotFound => {}
            AppError::InternalServerError(msg) => tracing::error!("Internal error: {}", msg),
        }

        Envelope::message(status, self.to_string()).into_response()
    }
}
