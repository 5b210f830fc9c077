//! JSON success responses that never panic on encoding failure.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::encoding_fallback;

/// Serialize `T` with the given status.
///
/// Serialization happens before anything is written; on failure the error is
/// logged and the minimal `ENCODING_ERROR` body is sent with status 500.
///
/// ```ignore
/// async fn create() -> SafeJson<CreatedResponse> {
///     SafeJson(StatusCode::CREATED, CreatedResponse { id: 7 })
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SafeJson<T>(pub StatusCode, pub T);

impl<T> SafeJson<T> {
    pub fn ok(value: T) -> Self {
        Self(StatusCode::OK, value)
    }

    pub fn created(value: T) -> Self {
        Self(StatusCode::CREATED, value)
    }
}

impl<T: Serialize> IntoResponse for SafeJson<T> {
    fn into_response(self) -> Response {
        let SafeJson(status, value) = self;
        match serde_json::to_vec(&value) {
            Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status_code = status.as_u16(),
                    "failed to encode JSON response"
                );
                encoding_fallback()
            }
        }
    }
}
