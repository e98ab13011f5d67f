//! Embedded schema migrations, applied on startup.

use sqlx::PgPool;
use tracing::info;

use crate::error::{CmsError, Result};

/// Apply any pending migrations from the `migrations/` directory
/// compiled into the binary.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| CmsError::database(format!("Migration failed: {e}")))?;

    info!("database migrations applied");
    Ok(())
}
