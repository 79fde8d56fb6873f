//! Schema bootstrap
//!
//! The schema ships inside the binary and is applied on every start.
//! All statements are `IF NOT EXISTS`, so re-running is a no-op.

use sqlx::postgres::PgPool;
use tracing::info;

const INITIAL_SCHEMA: &str = include_str!("../../migrations/0001_initial_schema.sql");

/// Create tables, constraints and indexes that do not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INITIAL_SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
