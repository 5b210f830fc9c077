use async_trait::async_trait;
use axum_helpers::RequestContext;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::Todo;

/// Repository trait for Todo persistence
///
/// Implementations log the outcome of every call under `ctx`'s span and
/// return storage failures unchanged as [`TodoError::Database`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a todo and return the generated id
    async fn create(&self, ctx: &RequestContext, title: String) -> TodoResult<i64>;

    /// Fetch a todo; [`TodoError::NotFound`] when no row matches
    async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> TodoResult<Todo>;

    /// All todos ordered by id ascending
    async fn list(&self, ctx: &RequestContext) -> TodoResult<Vec<Todo>>;

    /// Delete a todo; [`TodoError::NotFound`] when nothing was deleted
    async fn delete(&self, ctx: &RequestContext, id: i64) -> TodoResult<()>;
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<BTreeMap<i64, Todo>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, ctx: &RequestContext, title: String) -> TodoResult<i64> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let todo = Todo {
            id,
            title,
            completed: false,
            created_at: Utc::now(),
        };

        self.todos.write().await.insert(id, todo);

        tracing::info!(parent: ctx.span(), todo_id = id, "todo created");
        Ok(id)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> TodoResult<Todo> {
        let todos = self.todos.read().await;
        match todos.get(&id) {
            Some(todo) => Ok(todo.clone()),
            None => {
                tracing::warn!(parent: ctx.span(), todo_id = id, "todo not found");
                Err(TodoError::NotFound)
            }
        }
    }

    async fn list(&self, ctx: &RequestContext) -> TodoResult<Vec<Todo>> {
        let todos: Vec<Todo> = self.todos.read().await.values().cloned().collect();
        tracing::info!(parent: ctx.span(), count = todos.len(), "todos listed");
        Ok(todos)
    }

    async fn delete(&self, ctx: &RequestContext, id: i64) -> TodoResult<()> {
        if self.todos.write().await.remove(&id).is_some() {
            tracing::info!(parent: ctx.span(), todo_id = id, "todo deleted");
            Ok(())
        } else {
            tracing::warn!(parent: ctx.span(), todo_id = id, "todo not found");
            Err(TodoError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_todo() {
        let repo = InMemoryTodoRepository::new();
        let ctx = RequestContext::detached();

        let id = repo.create(&ctx, "Buy milk".to_string()).await.unwrap();
        assert_eq!(id, 1);

        let todo = repo.get_by_id(&ctx, id).await.unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_ids_increase_and_list_is_ordered() {
        let repo = InMemoryTodoRepository::new();
        let ctx = RequestContext::detached();

        for title in ["first", "second", "third"] {
            repo.create(&ctx, title.to_string()).await.unwrap();
        }

        let todos = repo.list(&ctx).await.unwrap();
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(todos[0].title, "first");
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryTodoRepository::new();
        let ctx = RequestContext::detached();

        let first = repo.create(&ctx, "a".to_string()).await.unwrap();
        repo.delete(&ctx, first).await.unwrap();
        let second = repo.create(&ctx, "b".to_string()).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_missing_todo_is_not_found() {
        let repo = InMemoryTodoRepository::new();
        let ctx = RequestContext::detached();

        assert!(matches!(
            repo.get_by_id(&ctx, 42).await,
            Err(TodoError::NotFound)
        ));
        assert!(matches!(repo.delete(&ctx, 42).await, Err(TodoError::NotFound)));
    }

    #[tokio::test]
    async fn test_empty_list() {
        let repo = InMemoryTodoRepository::new();
        let todos = repo.list(&RequestContext::detached()).await.unwrap();
        assert!(todos.is_empty());
    }
}
