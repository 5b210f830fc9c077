use axum_helpers::validation::{FieldRules, Rule, ValidateRules};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(1), Rule::MaxLength(255)];

/// Body of `POST /todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// 1 to 255 characters; surrounding whitespace is trimmed before storing
    #[serde(default)]
    #[schema(example = "Buy groceries", min_length = 1, max_length = 255)]
    pub title: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl ValidateRules for CreateTodoRequest {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![FieldRules::new("title", self.title.as_deref(), TITLE_RULES)]
    }
}

/// Todo as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Buy groceries")]
    pub title: String,
    #[schema(example = false)]
    pub completed: bool,
    /// RFC 3339, second precision, UTC
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Body of a successful `POST /todos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: i64,
}
