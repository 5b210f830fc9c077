//! HTTP middleware module.
//!
//! - [`request_context`]: request id generation, request span and logging,
//!   trace id propagation into error bodies
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::with_request_context;
//!
//! let app = with_request_context(Router::new().route("/", get(handler)));
//! ```

pub mod request_context;

pub use request_context::{
    REQUEST_ID_HEADER, TRACE_ID_HEADER, request_id, request_logging, with_request_context,
};
