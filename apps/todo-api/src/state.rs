//! Shared application state passed to request handlers.

use database::postgres::DatabaseConnection;

/// Cloned per handler; the connection is a pooled handle, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: DatabaseConnection) -> Self {
        Self { config, db }
    }
}
