//! Standard error messages for consistent error responses.

pub const INVALID_JSON: &str = "invalid JSON format";
pub const VALIDATION_FAILED: &str = "validation failed";
pub const INVALID_ID: &str = "invalid id parameter";
pub const INTERNAL_ERROR: &str = "internal server error";
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Trace id used when neither `X-Trace-Id` nor a request id is available.
pub const UNKNOWN_TRACE_ID: &str = "unknown";
