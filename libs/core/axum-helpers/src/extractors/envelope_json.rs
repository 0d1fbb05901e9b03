//! JSON body extractor with presence validation and envelope-shaped rejections.

use crate::errors::{AppError, messages};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, de::DeserializeOwned};
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the decoded body.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header, and
/// every rejection is an [`AppError::BadRequest`]:
/// - an undecodable body is rejected with the decoder's error text;
/// - bytes after the first complete JSON value are ignored;
/// - a failed `Validate` check is rejected with the first validation message
///   (set via `#[validate(..., message = "...")]`).
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[serde(default)]
///     #[validate(length(min = 1, message = "missing field"))]
///     email: String,
/// }
///
/// async fn create_user(EnvelopeJson(payload): EnvelopeJson<CreateUser>) { /* ... */ }
/// ```
pub struct EnvelopeJson<T>(pub T);

impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        // No `Deserializer::end`: trailing input after the value is not an error.
        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let data = T::deserialize(&mut deserializer).map_err(|e| {
            tracing::debug!(error = %e, "Rejected undecodable JSON body");
            AppError::BadRequest(e.to_string())
        })?;

        data.validate()
            .map_err(|e| AppError::BadRequest(first_message(&e)))?;

        Ok(EnvelopeJson(data))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| messages::VALIDATION_FAILED.to_string())
}
