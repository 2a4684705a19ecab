//! Startup schema initialization
//!
//! The watcher owns its schema and creates it on boot; statements are
//! idempotent so restarts are safe.

use sqlx::PgPool;
use tracing::info;

/// Create the presence tables and indexes if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Initializing database schema");

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS presence_samples (
            id          BIGSERIAL PRIMARY KEY,
            observed_at TIMESTAMPTZ NOT NULL,
            state       TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE INDEX IF NOT EXISTS idx_presence_samples_observed_at
        ON presence_samples (observed_at)
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS sessions (
            id               BIGSERIAL PRIMARY KEY,
            started_at       TIMESTAMPTZ NOT NULL,
            ended_at         TIMESTAMPTZ,
            duration_minutes INTEGER
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE INDEX IF NOT EXISTS idx_sessions_started_at
        ON sessions (started_at)
        ",
    )
    .execute(pool)
    .await?;

    // The active-session lookup filters on ended_at IS NULL
    sqlx::query(
        r"
        CREATE INDEX IF NOT EXISTS idx_sessions_ended_at
        ON sessions (ended_at)
        ",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
