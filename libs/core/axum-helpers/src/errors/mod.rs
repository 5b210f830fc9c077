//! Error taxonomy and the single error response writer.
//!
//! Every failure that reaches the HTTP boundary becomes an [`AppError`] and is
//! rendered as:
//!
//! ```json
//! { "error": "todo not found", "code": "TODO_NOT_FOUND", "trace_id": "9f2c4e1ab37d0c55" }
//! ```
//!
//! Validation failures add a `details` object mapping field name to reason.
//! Server-side failures are logged in full and rendered with a generic
//! message. The trace id is filled in by the request context middleware
//! (see [`crate::http::request_context`]); responses rendered without it carry
//! `"unknown"`.

pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use crate::validation::FieldViolations;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error identifier
    pub code: String,
    /// Correlation id for matching the response with server logs
    pub trace_id: String,
    /// Per-field validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            trace_id: messages::UNKNOWN_TRACE_ID.to_string(),
            details: None,
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error that carries its own HTTP status and client-facing code.
///
/// Domain crates convert their errors into this type; the code is free-form
/// (e.g. `TODO_NOT_FOUND`). Context entries are logged, never sent.
#[derive(Debug)]
pub struct ApplicationError {
    pub status: StatusCode,
    pub code: Cow<'static, str>,
    pub message: String,
    pub context: BTreeMap<&'static str, String>,
    source: Option<BoxError>,
}

impl ApplicationError {
    pub fn new(
        status: StatusCode,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            source: None,
        }
    }

    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code.status(), code.as_str(), code.default_message())
    }

    /// 400 `VALIDATION_ERROR` with a custom message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError.as_str(),
            message,
        )
    }

    /// 404 `NOT_FOUND` for the named resource.
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ErrorCode::NotFound.as_str(),
            format!("{resource} not found"),
        )
        .with_context("resource", resource)
    }

    /// 500 `DATABASE_ERROR` wrapping the storage failure.
    pub fn database(
        err: impl std::error::Error + Send + Sync + 'static,
        operation: &str,
    ) -> Self {
        Self::from_code(ErrorCode::DatabaseError)
            .with_source(err)
            .with_context("operation", operation)
    }

    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.insert(key, value.to_string());
        self
    }

    pub fn with_source(mut self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(err));
        self
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            f.write_str(&self.message)
        } else if let Some(source) = &self.source {
            write!(f, "{source}")
        } else {
            f.write_str(messages::UNKNOWN_ERROR)
        }
    }
}

impl std::error::Error for ApplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Carries its own status and code
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Request body is not valid JSON for the target type
    #[error("invalid JSON format: {0}")]
    InvalidJson(String),

    /// Request body decoded but broke one or more field rules
    #[error("validation failed: {0:?}")]
    Validation(FieldViolations),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    /// Status and body for this error; logs the failure as a side effect.
    fn describe(self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::Application(err) => {
                let source = err.source.as_ref().map(|e| e.to_string());
                if err.status.is_server_error() {
                    tracing::error!(
                        app_error_code = %err.code,
                        http_status = err.status.as_u16(),
                        context = ?err.context,
                        error = source.as_deref(),
                        "application error"
                    );
                } else {
                    tracing::warn!(
                        app_error_code = %err.code,
                        http_status = err.status.as_u16(),
                        context = ?err.context,
                        error = source.as_deref(),
                        "application error"
                    );
                }
                let message = err.to_string();
                (err.status, ErrorResponse::new(message, err.code))
            }
            AppError::InvalidJson(detail) => {
                tracing::warn!(
                    error_code = ErrorCode::ValidationError.code(),
                    error = %detail,
                    "invalid JSON body"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(messages::INVALID_JSON, ErrorCode::ValidationError.as_str()),
                )
            }
            AppError::Validation(details) => {
                tracing::warn!(
                    error_code = ErrorCode::ValidationError.code(),
                    details = ?details,
                    "validation failed"
                );
                let mut body = ErrorResponse::new(
                    messages::VALIDATION_FAILED,
                    ErrorCode::ValidationError.as_str(),
                );
                body.details = Some(details);
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Database(err) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    error = %err,
                    "unexpected error occurred"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(messages::INTERNAL_ERROR, ErrorCode::InternalError.as_str()),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.describe();
        error_response(status, body)
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        AppError::Application(ApplicationError::from_code(code))
    }
}

/// Render an error body.
///
/// The body is also stored in the response extensions so the request context
/// middleware can re-render it with the request's trace id.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    match serde_json::to_vec(&body) {
        Ok(bytes) => {
            let mut response =
                (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response();
            response.extensions_mut().insert(body);
            response
        }
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

/// Replace the `trace_id` of an error response rendered by [`error_response`].
///
/// Responses without an error body pass through untouched.
pub fn with_trace_id(response: Response, trace_id: &str) -> Response {
    let (mut parts, body) = response.into_parts();
    let Some(mut error) = parts.extensions.remove::<ErrorResponse>() else {
        return Response::from_parts(parts, body);
    };

    error.trace_id = trace_id.to_string();
    match serde_json::to_vec(&error) {
        Ok(bytes) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                status_code = parts.status.as_u16(),
                "failed to encode JSON response"
            );
            encoding_fallback()
        }
    }
}

/// Minimal 500 body for when serialization itself fails.
///
/// Built by hand from [`ErrorCode::EncodingError`] so it cannot fail again.
pub fn encoding_fallback() -> Response {
    let code = ErrorCode::EncodingError;
    let body = format!(
        r#"{{"error":"{}","code":"{}"}}"#,
        code.default_message(),
        code.as_str()
    );
    (
        code.status(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn application_error_keeps_its_status_and_code() {
        let err = AppError::from(ApplicationError::new(
            StatusCode::CONFLICT,
            "TITLE_TAKEN",
            "title already used",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(json["error"], "title already used");
        assert_eq!(json["code"], "TITLE_TAKEN");
        assert_eq!(json["trace_id"], "unknown");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn helper_constructors() {
        let not_found = ApplicationError::not_found("project");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.code, "NOT_FOUND");
        assert_eq!(not_found.message, "project not found");
        assert_eq!(not_found.context.get("resource").map(String::as_str), Some("project"));

        let validation = ApplicationError::validation("bad input");
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.code, "VALIDATION_ERROR");

        let database = ApplicationError::database(DbErr::Custom("boom".into()), "insert");
        assert_eq!(database.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(database.code, "DATABASE_ERROR");
        assert_eq!(database.to_string(), "database operation failed");
        assert!(std::error::Error::source(&database).is_some());
        assert_eq!(database.context.get("operation").map(String::as_str), Some("insert"));
    }

    #[test]
    fn display_falls_back_to_source_then_unknown() {
        let with_source = ApplicationError::new(StatusCode::BAD_GATEWAY, "UPSTREAM", "")
            .with_source(DbErr::Custom("upstream down".into()));
        assert!(with_source.to_string().contains("upstream down"));

        let bare = ApplicationError::new(StatusCode::BAD_GATEWAY, "UPSTREAM", "");
        assert_eq!(bare.to_string(), "unknown error");
    }

    #[tokio::test]
    async fn validation_error_includes_details() {
        let mut details = FieldViolations::new();
        details.insert("title".into(), "title is required".into());

        let response = AppError::Validation(details).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "validation failed");
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["title"], "title is required");
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let response = AppError::InvalidJson("expected value at line 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid JSON format");
    }

    #[tokio::test]
    async fn infrastructure_errors_are_generic_500() {
        let response = AppError::Database(DbErr::Custom("password=hunter2".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "internal server error");
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn with_trace_id_rewrites_error_bodies_only() {
        let response = with_trace_id(AppError::from(ErrorCode::NotFound).into_response(), "abc123");
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
        let json = body_json(response).await;
        assert_eq!(json["trace_id"], "abc123");
        assert_eq!(json["code"], "NOT_FOUND");

        let plain = with_trace_id("OK".into_response(), "abc123");
        let bytes = plain.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn encoding_fallback_body_is_fixed() {
        let response = encoding_fallback();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &bytes[..],
            br#"{"error":"internal server error","code":"ENCODING_ERROR"}"#
        );
    }
}
