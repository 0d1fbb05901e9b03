use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, %uri, "No route matched");
    AppError::NotFound.into_response()
}
