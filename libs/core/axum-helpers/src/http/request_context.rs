use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, error_span};

use crate::context::{RequestContext, RequestId, resolve_trace_id};
use crate::errors::with_trace_id;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Assigns a fresh [`RequestId`] to the request and echoes it in `X-Request-ID`.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId::generate();
    request.extensions_mut().insert(id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Opens the `request` span, installs the [`RequestContext`] and logs completion.
///
/// Error bodies produced further down get their `trace_id` filled in here.
/// Must run inside [`request_id`]; use [`with_request_context`] to get the
/// order right.
pub async fn request_logging(mut request: Request, next: Next) -> Response {
    let id = request.extensions().get::<RequestId>().cloned();
    let trace_header = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let trace_id = resolve_trace_id(trace_header, id.as_ref());

    // ERROR level: the span must stay enabled under every LOG_LEVEL
    let span = error_span!(
        "request",
        request_id = id.as_ref().map(RequestId::as_str),
        trace_id = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request
        .extensions_mut()
        .insert(RequestContext::new(id, trace_id.clone(), span.clone()));

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "request failed");
        } else if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), latency_ms, "request rejected");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "request completed");
        }
    });

    with_trace_id(response, &trace_id)
}

/// Wrap a router with [`request_logging`] inside [`request_id`].
pub fn with_request_context<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(request_id))
}
