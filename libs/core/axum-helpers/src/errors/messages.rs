//! Fixed messages carried in the response envelope.

pub const SUCCESS: &str = "success";
pub const NOT_FOUND: &str = "not Found";
pub const VALIDATION_FAILED: &str = "Request validation failed";
