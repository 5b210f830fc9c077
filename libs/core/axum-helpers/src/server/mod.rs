//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation, fallbacks and timeouts
//! - Health and readiness helpers
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server);
//! create_production_app(router, &config.server, async move { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_until_shutdown};
pub use health::{HealthCheckFuture, health_handler, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
