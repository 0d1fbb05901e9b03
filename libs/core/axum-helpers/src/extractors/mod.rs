//! Custom extractors for Axum handlers.

pub mod envelope_json;

pub use envelope_json::EnvelopeJson;
