use super::health::health_router;
use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found, timeout_body};
use crate::http::with_request_context;
use axum::{Router, http::StatusCode, middleware};
use core_config::duration::format_duration;
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router around the given API routes.
///
/// This function sets up:
/// - Swagger UI at `/swagger` backed by `/api-docs/openapi.json`
/// - `/health` liveness endpoint
/// - JSON 404 and 405 fallbacks
/// - Request body read deadline (`read_timeout`) and per-request deadline
///   (`write_timeout`), both answered with JSON 408 bodies
/// - HTTP tracing and the request context middleware (request id, trace id,
///   completion log)
///
/// `apis` must already carry its state and full paths.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/api/v1/todos", todos::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &config.server);
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> Router
where
    T: OpenApi + 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", T::openapi()))
        .merge(health_router())
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(RequestBodyTimeoutLayer::new(server_config.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.write_timeout,
        ))
        .layer(middleware::map_response(timeout_body))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        );

    with_request_context(router)
}

/// Production server with coordinated shutdown and cleanup.
///
/// Binds `host:port`, serves until SIGINT or SIGTERM, gives in-flight
/// requests up to `shutdown_timeout` to finish and then runs `cleanup`
/// (closing the database pool and the like) under the same deadline.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     if let Err(e) = db.close().await {
///         tracing::error!(error = %e, "failed to close database pool");
///     }
/// };
///
/// create_production_app(router, &config.server, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!(
        address = %listener.local_addr()?,
        read_timeout = %format_duration(server_config.read_timeout),
        write_timeout = %format_duration(server_config.write_timeout),
        idle_timeout = %format_duration(server_config.idle_timeout),
        shutdown_timeout = %format_duration(server_config.shutdown_timeout),
        "server starting"
    );

    let (coordinator, _rx) = ShutdownCoordinator::new();
    serve_until_shutdown(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serve `router` on `listener` until `coordinator` signals shutdown.
///
/// After the signal new connections are refused and in-flight requests get
/// `grace` to complete; whatever is still running after that is abandoned.
/// `cleanup` runs once the server has stopped, bounded by `grace` as well.
pub async fn serve_until_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    grace: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let mut shutdown_rx = coordinator.subscribe();
    let signal = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    };

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .into_future();

    let drain_deadline = async move {
        let _ = shutdown_rx.recv().await;
        tokio::time::sleep(grace).await;
    };

    let serve_result = tokio::select! {
        result = server => result.inspect_err(|e| {
            tracing::error!(error = %e, "server encountered an error");
        }),
        _ = drain_deadline => {
            warn!(
                timeout = %format_duration(grace),
                "in-flight requests did not finish before the shutdown deadline"
            );
            Ok(())
        }
    };

    info!(timeout = %format_duration(grace), "running cleanup");
    match tokio::time::timeout(grace, cleanup).await {
        Ok(()) => info!("cleanup completed"),
        Err(_) => warn!(
            timeout = %format_duration(grace),
            "cleanup exceeded timeout, forcing shutdown"
        ),
    }

    info!("server stopped");
    serve_result
}
