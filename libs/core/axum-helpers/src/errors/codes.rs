//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//! - HTTP status
//!
//! Domain crates add their own codes through
//! [`ApplicationError`](super::ApplicationError); these are the generic ones.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "validation failed");
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request body or parameters failed validation
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// HTTP method not supported on this route
    MethodNotAllowed,

    /// Request body or handler did not complete in time
    RequestTimeout,

    /// Request body exceeds the size limit
    PayloadTooLarge,

    // Server errors (5000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// A storage operation failed
    DatabaseError,

    /// The response body could not be serialized
    EncodingError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::EncodingError => "ENCODING_ERROR",
        }
    }

    /// Integer code attached to log lines as `error_code`.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::RequestTimeout => 1008,
            Self::PayloadTooLarge => 1013,
            Self::InternalError => 5000,
            Self::DatabaseError => 5001,
            Self::EncodingError => 5002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation failed",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::RequestTimeout => "request timed out",
            Self::PayloadTooLarge => "request body too large",
            Self::InternalError => "internal server error",
            Self::DatabaseError => "database operation failed",
            Self::EncodingError => "internal server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalError | Self::DatabaseError | Self::EncodingError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
