//! Readiness probe backed by a real database round trip.

use crate::state::AppState;
use axum::{extract::State, response::Response};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health_detailed;

/// Readiness check endpoint.
///
/// Pings PostgreSQL through the pool; 503 while the database is unreachable.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "All dependencies reachable",
            example = json!({ "status": "ready", "database": "connected" })),
        (status = 503, description = "A dependency is unreachable",
            example = json!({ "status": "not ready", "database": "disconnected" }))
    )
)]
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let status = check_health_detailed(&state.db).await;
            if status.healthy {
                Ok(())
            } else {
                Err(status
                    .message
                    .unwrap_or_else(|| "database ping failed".to_string()))
            }
        }),
    )];

    run_health_checks(checks).await
}
