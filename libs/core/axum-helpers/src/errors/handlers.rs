use super::{AppError, ErrorCode, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::from(ErrorCode::NotFound)
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> AppError {
    AppError::from(ErrorCode::MethodNotAllowed)
}

/// Response mapper giving the bare 408 of the request deadline a JSON body.
pub async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && response.extensions().get::<ErrorResponse>().is_none()
    {
        return AppError::from(ErrorCode::RequestTimeout).into_response();
    }
    response
}
