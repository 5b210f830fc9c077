use axum_helpers::server::create_production_app;
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{check_health, connect_from_config, run_migrations};
use eyre::WrapErr;
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // .env values never override variables already set in the environment
    let dotenv_loaded = load_dotenv();

    let config = Config::from_env()?;

    init_tracing(&config.log);

    info!(
        environment = ?config.environment,
        log_level = %config.log.level,
        dotenv_loaded,
        "starting todo API"
    );

    let db = connect_from_config(config.database.clone())
        .await
        .wrap_err("PostgreSQL connection failed")?;

    check_health(&db)
        .await
        .wrap_err("PostgreSQL ping failed")?;

    run_migrations::<Migrator>(&db, "todo_api")
        .await
        .wrap_err("database migrations failed")?;

    let state = AppState::new(config, db);
    let app = api::app(&state);

    let AppState { config, db } = state;
    create_production_app(app, &config.server, async move {
        info!("closing database connections");
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed"),
            Err(e) => tracing::error!(error = %e, "error closing PostgreSQL connection"),
        }
    })
    .await
    .wrap_err("server error")?;

    info!("todo API shutdown complete");
    Ok(())
}
