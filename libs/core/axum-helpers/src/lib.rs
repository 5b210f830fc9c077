//! # Axum Helpers
//!
//! Shared HTTP plumbing for the todo service.
//!
//! ## Modules
//!
//! - **[`errors`]**: error taxonomy and the single JSON error writer
//! - **[`validation`]**: declarative field rules and their messages
//! - **[`extractors`]**: validated JSON body, integer id path
//! - **[`context`]**: request-scoped context passed to services and repositories
//! - **[`http`]**: request id and request logging middleware
//! - **[`response`]**: JSON success responses with an encoding fallback
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config);
//!     create_production_app(router, &config, async {}).await
//! }
//! ```

pub mod context;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;
pub mod validation;

pub use context::{RequestContext, RequestId};

pub use errors::{AppError, ApplicationError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};

pub use http::with_request_context;

pub use response::SafeJson;

pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router, health_router,
    run_health_checks, serve_until_shutdown,
};

pub use validation::{FieldRules, FieldViolations, Rule, ValidateRules, validate};
