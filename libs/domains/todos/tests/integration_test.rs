//! Integration tests for the Todos domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migration creates the schema the entity expects
//! - Generated ids, defaults and ordering come from the database
//! - Missing rows map to domain errors

use axum_helpers::RequestContext;
use domain_todos::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_todo() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let ctx = RequestContext::detached();

    let title = builder.title("main");
    let id = repo.create(&ctx, title.clone()).await.unwrap();
    assert!(id > 0);

    let todo = repo.get_by_id(&ctx, id).await.unwrap();
    assert_eq!(todo.id, id);
    assert_eq!(todo.title, title);
    assert!(!todo.completed);
    assert!(todo.created_at <= chrono::Utc::now());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_ordered");
    let ctx = RequestContext::detached();

    assert!(repo.list(&ctx).await.unwrap().is_empty());

    for suffix in ["a", "b", "c"] {
        repo.create(&ctx, builder.title(suffix)).await.unwrap();
    }

    let todos = repo.list(&ctx).await.unwrap();
    assert_eq!(todos.len(), 3);
    let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
    assert_ascending(&ids, "list ids");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_and_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let ctx = RequestContext::detached();

    let id = repo.create(&ctx, "short lived".to_string()).await.unwrap();
    repo.delete(&ctx, id).await.unwrap();

    assert!(matches!(repo.get_by_id(&ctx, id).await, Err(TodoError::NotFound)));
    assert!(matches!(repo.delete(&ctx, id).await, Err(TodoError::NotFound)));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_ids_are_unique_after_truncate() {
    let db = TestDatabase::new().await;
    let repo = PgTodoRepository::new(db.connection());
    let ctx = RequestContext::detached();

    repo.create(&ctx, "one".to_string()).await.unwrap();
    db.truncate_todos().await;

    let id = repo.create(&ctx, "two".to_string()).await.unwrap();
    assert_eq!(id, 1);
    let todo = assert_some(
        repo.list(&ctx).await.unwrap().into_iter().next(),
        "todo after truncate",
    );
    assert_eq!(todo.title, "two");
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_service_stores_trimmed_title_of_max_length() {
    let db = TestDatabase::new().await;
    let service = TodoService::new(PgTodoRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("max_length");
    let ctx = RequestContext::detached();

    let title = builder.title_of_len(255);
    let id = service.create(&ctx, &format!("  {title}  ")).await.unwrap();

    let todo = service.get_by_id(&ctx, id).await.unwrap();
    assert_eq!(todo.title, title);
}
