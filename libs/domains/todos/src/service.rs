use axum_helpers::RequestContext;
use std::sync::Arc;

use crate::error::{TodoError, TodoResult};
use crate::models::Todo;
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
///
/// One service call maps to at most one repository call. Ids that are not
/// positive are reported as [`TodoError::NotFound`] without touching storage.
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a todo from a title; surrounding whitespace is removed first
    pub async fn create(&self, ctx: &RequestContext, title: &str) -> TodoResult<i64> {
        let title = title.trim();
        if title.is_empty() {
            tracing::warn!(parent: ctx.span(), "rejected todo with empty title");
            return Err(TodoError::InvalidTitle);
        }

        self.repository.create(ctx, title.to_string()).await
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> TodoResult<Todo> {
        if id <= 0 {
            tracing::warn!(parent: ctx.span(), todo_id = id, "invalid todo id");
            return Err(TodoError::NotFound);
        }

        self.repository.get_by_id(ctx, id).await
    }

    pub async fn list(&self, ctx: &RequestContext) -> TodoResult<Vec<Todo>> {
        let todos = self.repository.list(ctx).await?;
        tracing::info!(parent: ctx.span(), count = todos.len(), "todos retrieved");
        Ok(todos)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> TodoResult<()> {
        if id <= 0 {
            tracing::warn!(parent: ctx.span(), todo_id = id, "invalid todo id");
            return Err(TodoError::NotFound);
        }

        self.repository.delete(ctx, id).await
    }
}
