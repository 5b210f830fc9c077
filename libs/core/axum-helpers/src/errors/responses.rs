//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "internal server error",
        "code": "INTERNAL_ERROR",
        "trace_id": "5b1f0c9e2d7a4e63"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "validation failed",
        "code": "VALIDATION_ERROR",
        "trace_id": "5b1f0c9e2d7a4e63",
        "details": {
            "title": "title must be at least 1 characters long"
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id parameter",
    content_type = "application/json",
    example = json!({
        "error": "invalid id parameter",
        "code": "VALIDATION_ERROR",
        "trace_id": "5b1f0c9e2d7a4e63"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "todo not found",
        "code": "TODO_NOT_FOUND",
        "trace_id": "5b1f0c9e2d7a4e63"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
