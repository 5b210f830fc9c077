//! Request-scoped context passed explicitly through service and repository calls.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::fmt;
use tracing::Span;

use crate::errors::messages::UNKNOWN_TRACE_ID;

/// Per-request correlation id: 16 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh id from 8 bytes of the thread-local CSPRNG.
    pub fn generate() -> Self {
        let bytes: [u8; 8] = rand::random();
        let mut id = String::with_capacity(16);
        for byte in bytes {
            id.push_str(&format!("{byte:02x}"));
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RequestId> for String {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

/// Correlation data and the log span of one request.
///
/// Log through [`RequestContext::span`] as the parent so every line carries
/// `request_id`:
///
/// ```ignore
/// tracing::info!(parent: ctx.span(), todo_id = id, "todo created");
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Option<RequestId>,
    trace_id: String,
    span: Span,
}

impl RequestContext {
    pub fn new(request_id: Option<RequestId>, trace_id: impl Into<String>, span: Span) -> Self {
        Self {
            request_id,
            trace_id: trace_id.into(),
            span,
        }
    }

    /// Context for work outside a request (startup, tests, background jobs).
    ///
    /// Logs attach to whatever span is current.
    pub fn detached() -> Self {
        Self {
            request_id: None,
            trace_id: UNKNOWN_TRACE_ID.to_string(),
            span: Span::current(),
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::as_str)
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::detached()
    }
}

/// Resolve the trace id reported in error bodies: an inbound `X-Trace-Id`
/// header, else the request id, else `"unknown"`.
pub fn resolve_trace_id(header: Option<&str>, request_id: Option<&RequestId>) -> String {
    match (header.filter(|h| !h.is_empty()), request_id) {
        (Some(trace), _) => trace.to_string(),
        (None, Some(id)) => id.to_string(),
        (None, None) => UNKNOWN_TRACE_ID.to_string(),
    }
}

/// Extracts the context installed by the request context middleware, or a
/// detached one when the middleware is not mounted.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(RequestContext::detached))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn request_id_is_16_lowercase_hex() {
        let id = RequestId::generate();
        assert_eq!(id.as_str().len(), 16);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn request_ids_differ() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| RequestId::generate().into()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn trace_id_resolution_order() {
        let id = RequestId("00112233aabbccdd".to_string());
        assert_eq!(resolve_trace_id(Some("trace-1"), Some(&id)), "trace-1");
        assert_eq!(resolve_trace_id(Some(""), Some(&id)), "00112233aabbccdd");
        assert_eq!(resolve_trace_id(None, Some(&id)), "00112233aabbccdd");
        assert_eq!(resolve_trace_id(None, None), "unknown");
    }

    #[tokio::test]
    async fn extractor_falls_back_to_detached() {
        let (mut parts, _) = Request::new(()).into_parts();
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(ctx.request_id().is_none());
        assert_eq!(ctx.trace_id(), "unknown");
    }

    #[tokio::test]
    async fn extractor_returns_installed_context() {
        let (mut parts, _) = Request::new(()).into_parts();
        let id = RequestId("0123456789abcdef".to_string());
        parts
            .extensions
            .insert(RequestContext::new(Some(id), "trace-9", Span::none()));

        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.request_id(), Some("0123456789abcdef"));
        assert_eq!(ctx.trace_id(), "trace-9");
    }
}
