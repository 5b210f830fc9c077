//! JSON extractor with declarative rule validation.

use crate::errors::{AppError, ErrorCode};
use crate::validation::{ValidateRules, validate};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use std::error::Error as _;
use tower_http::timeout::TimeoutError;

/// JSON extractor with automatic validation.
///
/// The body is decoded as JSON whatever the `Content-Type`. A body that does
/// not decode is rejected with "invalid JSON format"; one that breaks a field
/// rule is rejected with "validation failed" and per-field details. A body
/// over the size limit is a 413 and a body that stalls past the read deadline
/// is a 408.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use axum_helpers::validation::{FieldRules, Rule, ValidateRules};
///
/// #[derive(Deserialize)]
/// struct CreateUser {
///     #[serde(default)]
///     email: Option<String>,
/// }
///
/// impl ValidateRules for CreateUser {
///     fn field_rules(&self) -> Vec<FieldRules<'_>> {
///         vec![FieldRules::new("email", self.email.as_deref(), &[Rule::Required, Rule::Email])]
///     }
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {:?}", payload.email)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRules,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_read_error)?;

        let data: T =
            serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidJson(e.to_string()))?;

        validate(&data).map_err(AppError::Validation)?;

        Ok(ValidatedJson(data))
    }
}

fn body_read_error(rejection: BytesRejection) -> AppError {
    let timed_out = std::iter::successors(rejection.source(), |e| (*e).source())
        .any(|e| e.is::<TimeoutError>());

    if timed_out {
        AppError::from(ErrorCode::RequestTimeout)
    } else if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::from(ErrorCode::PayloadTooLarge)
    } else {
        AppError::InvalidJson(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldRules, Rule};
    use axum::{body::Body, http::Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        title: Option<String>,
    }

    impl ValidateRules for Payload {
        fn field_rules(&self) -> Vec<FieldRules<'_>> {
            vec![FieldRules::new(
                "title",
                self.title.as_deref(),
                &[Rule::Required, Rule::MaxLength(5)],
            )]
        }
    }

    async fn extract(body: &'static str) -> Result<ValidatedJson<Payload>, AppError> {
        let req = HttpRequest::post("/").body(Body::from(body)).unwrap();
        ValidatedJson::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn accepts_valid_body_without_content_type() {
        let ValidatedJson(payload) = extract(r#"{"title":"milk"}"#).await.unwrap();
        assert_eq!(payload.title.as_deref(), Some("milk"));
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_json() {
        for body in ["{", "", "not json", r#"{"title": 5}"#] {
            assert!(
                matches!(extract(body).await, Err(AppError::InvalidJson(_))),
                "body {body:?}"
            );
        }
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let body = vec![b' '; 3 * 1024 * 1024];
        let req = HttpRequest::post("/").body(Body::from(body)).unwrap();

        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        let response = axum::response::IntoResponse::into_response(err);
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn rule_failures_are_reported_per_field() {
        match extract("{}").await {
            Err(AppError::Validation(details)) => {
                assert_eq!(details["title"], "title is required");
            }
            other => panic!("unexpected: {:?}", other.err()),
        }

        match extract(r#"{"title":"too long"}"#).await {
            Err(AppError::Validation(details)) => {
                assert_eq!(details["title"], "title must be no more than 5 characters long");
            }
            other => panic!("unexpected: {:?}", other.err()),
        }
    }
}
