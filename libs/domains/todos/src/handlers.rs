use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    IdPath, RequestContext, SafeJson, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{CreateTodoRequest, CreatedResponse, TodoResponse};
use crate::repository::TodoRepository;
use crate::service::TodoService;

const TAG: &str = "todos";

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(create_todo, get_todo, list_todos, delete_todo),
    components(
        schemas(CreateTodoRequest, CreatedResponse, TodoResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Todo management endpoints")
    )
)]
pub struct TodosApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .with_state(shared_service)
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "/todos",
    tag = TAG,
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<CreateTodoRequest>,
) -> TodoResult<SafeJson<CreatedResponse>> {
    let title = input.title.unwrap_or_default();
    let id = service.create(&ctx, &title).await?;
    Ok(SafeJson::created(CreatedResponse { id }))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> TodoResult<SafeJson<TodoResponse>> {
    let todo = service.get_by_id(&ctx, id).await?;
    Ok(SafeJson::ok(todo.into()))
}

/// List all todos
#[utoipa::path(
    get,
    path = "/todos",
    tag = TAG,
    responses(
        (status = 200, description = "All todos ordered by id", body = Vec<TodoResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ctx: RequestContext,
) -> TodoResult<SafeJson<Vec<TodoResponse>>> {
    let todos = service.list(&ctx).await?;
    Ok(SafeJson::ok(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> TodoResult<StatusCode> {
    service.delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
