use axum::{Router, routing::get};
use axum_helpers::server::create_router;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod todos;

/// Versioned API routes; every sub-router has its state applied.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/api/v1", todos::router(state))
}

/// Router with the `/ready` endpoint that performs the database check.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: API routes, probes, docs and middleware.
pub fn app(state: &AppState) -> Router {
    let apis = routes(state).merge(ready_router(state.clone()));
    create_router::<ApiDoc>(apis, &state.config.server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use domain_todos::entity;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> AppState {
        AppState::new(Config::default(), db)
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn ping_row() -> BTreeMap<&'static str, sea_orm::Value> {
        BTreeMap::from([("?column?", sea_orm::Value::Int(Some(1)))])
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn lists_todos_under_api_v1() {
        let created_at = "2024-01-15T10:30:00+00:00".parse().unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                id: 1,
                title: "Buy milk".to_string(),
                completed: false,
                created_at,
            }]])
            .into_connection();

        let response = app(&state(db)).oneshot(get("/api/v1/todos")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(
            json_body(response).await,
            json!([{
                "id": 1,
                "title": "Buy milk",
                "completed": false,
                "created_at": "2024-01-15T10:30:00Z"
            }])
        );
    }

    #[tokio::test]
    async fn database_failure_is_generic_500() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"todos\" does not exist".into())])
            .into_connection();

        let response = app(&state(db)).oneshot(get("/api/v1/todos/3")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let request_id = response.headers()["x-request-id"].to_str().unwrap().to_string();
        let json = json_body(response).await;
        assert_eq!(json["error"], "internal server error");
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["trace_id"], request_id);
    }

    #[tokio::test]
    async fn invalid_id_never_reaches_the_database() {
        let response = app(&state(empty_db()))
            .oneshot(get("/api/v1/todos/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "invalid id parameter");
    }

    #[tokio::test]
    async fn ready_reports_database_state() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ping_row()]])
            .into_connection();
        let response = app(&state(db)).oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "status": "ready", "database": "connected" })
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let response = app(&state(db)).oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["database"], "disconnected");
    }

    #[tokio::test]
    async fn health_and_docs_are_mounted() {
        let app = app(&state(empty_db()));

        let health = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let doc = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
        assert_eq!(doc.status(), StatusCode::OK);
        let json = json_body(doc).await;
        assert!(json["paths"].get("/api/v1/todos").is_some());
        assert!(json["paths"].get("/api/v1/todos/{id}").is_some());
        assert!(json["paths"].get("/ready").is_some());
    }
}
