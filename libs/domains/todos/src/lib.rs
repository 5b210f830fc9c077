//! Todos Domain
//!
//! Create, fetch, list and delete todo items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Title normalization, id short-circuits
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! Every service and repository call takes the [`RequestContext`] of the
//! request it serves, so log lines carry the request id.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{
//!     handlers,
//!     repository::InMemoryTodoRepository,
//!     service::TodoService,
//! };
//!
//! let repository = InMemoryTodoRepository::new();
//! let service = TodoService::new(repository);
//!
//! // Routes for /todos and /todos/{id}
//! let router = handlers::router(service);
//! ```
//!
//! [`RequestContext`]: axum_helpers::RequestContext

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::TodosApiDoc;
pub use models::{CreateTodoRequest, CreatedResponse, Todo, TodoResponse};
pub use postgres::PgTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
