//! Integer id path parameter extractor.

use crate::errors::{AppError, ApplicationError, messages};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a single `{id}` path segment parsed as `i64`.
///
/// Anything that is not a base-10 integer is rejected with 400
/// `VALIDATION_ERROR` "invalid id parameter". Range checks are left to the
/// caller.
///
/// # Example
/// ```ignore
/// async fn get_todo(IdPath(id): IdPath) -> String {
///     format!("Todo ID: {}", id)
/// }
///
/// let app = Router::new().route("/todos/{id}", get(get_todo));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "missing id path parameter");
                ApplicationError::validation(messages::INVALID_ID)
            })?;

        raw.parse::<i64>().map(IdPath).map_err(|e| {
            tracing::warn!(id = %raw, error = %e, "invalid id parameter");
            ApplicationError::validation(messages::INVALID_ID).into()
        })
    }
}
