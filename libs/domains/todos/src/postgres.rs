use async_trait::async_trait;
use axum_helpers::RequestContext;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::Todo,
    repository::TodoRepository,
};

/// PostgreSQL-backed todo storage
#[derive(Clone)]
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, ctx: &RequestContext, title: String) -> TodoResult<i64> {
        // id, completed and created_at come from column defaults
        let active_model = entity::ActiveModel {
            title: Set(title),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            tracing::error!(parent: ctx.span(), error = %e, "failed to create todo");
            TodoError::Database(e)
        })?;

        tracing::info!(parent: ctx.span(), todo_id = model.id, "todo created");
        Ok(model.id)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> TodoResult<Todo> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(parent: ctx.span(), todo_id = id, error = %e, "failed to get todo");
                TodoError::Database(e)
            })?;

        match model {
            Some(model) => Ok(model.into()),
            None => {
                tracing::warn!(parent: ctx.span(), todo_id = id, "todo not found");
                Err(TodoError::NotFound)
            }
        }
    }

    async fn list(&self, ctx: &RequestContext) -> TodoResult<Vec<Todo>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(parent: ctx.span(), error = %e, "failed to list todos");
                TodoError::Database(e)
            })?;

        tracing::info!(parent: ctx.span(), count = models.len(), "todos listed");
        Ok(models.into_iter().map(Todo::from).collect())
    }

    async fn delete(&self, ctx: &RequestContext, id: i64) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(parent: ctx.span(), todo_id = id, error = %e, "failed to delete todo");
                TodoError::Database(e)
            })?;

        if result.rows_affected == 0 {
            tracing::warn!(parent: ctx.span(), todo_id = id, "todo not found");
            return Err(TodoError::NotFound);
        }

        tracing::info!(parent: ctx.span(), todo_id = id, "todo deleted");
        Ok(())
    }
}
