use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ApplicationError};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo not found")]
    NotFound,

    #[error("title cannot be empty")]
    InvalidTitle,

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound => ApplicationError::new(
                StatusCode::NOT_FOUND,
                "TODO_NOT_FOUND",
                TodoError::NotFound.to_string(),
            )
            .into(),
            TodoError::InvalidTitle => ApplicationError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_TITLE",
                TodoError::InvalidTitle.to_string(),
            )
            .into(),
            TodoError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
