//! Server binary: loads configuration, connects to PostgreSQL, runs
//! migrations and serves the API. Optionally starts the scheduled
//! publishing sweep.

use std::time::Duration;

use tracing::info;

use pressroom_core::config::CmsConfig;
use pressroom_core::database;
use pressroom_core::logging::init_logging;
use pressroom_core::web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = CmsConfig::from_env()?;
    let pool = database::connect_pool(&config).await?;
    database::run_migrations(&pool).await?;

    let state = AppState::for_postgres(config.clone(), pool)?;

    if config.scheduler.enabled {
        let publisher = state.scheduled_publisher.clone();
        let interval = Duration::from_secs(config.scheduler.interval_seconds);
        info!(interval_seconds = config.scheduler.interval_seconds, "scheduled publisher enabled");
        tokio::spawn(async move {
            publisher.run(interval).await;
        });
    }

    let app = pressroom_core::web::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
