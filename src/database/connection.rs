//! PostgreSQL connection pool construction.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::CmsConfig;
use crate::error::{CmsError, Result};

/// Build a connection pool from configuration.
pub async fn connect_pool(config: &CmsConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await
        .map_err(|e| CmsError::database(format!("Failed to connect to database: {e}")))?;

    info!(max_connections = config.max_connections, "database pool established");

    Ok(pool)
}
