//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use vigil_core::entities::Session;
use vigil_core::traits::{RepoResult, SessionRepository};
use vigil_core::value_objects::SessionId;

use crate::models::SessionModel;

use super::error::{map_db_error, session_not_found};

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self))]
    async fn create(&self, session: &Session) -> RepoResult<SessionId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO sessions (started_at, ended_at, duration_minutes)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(session.started_at)
        .bind(session.ended_at)
        .bind(session.duration_minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(SessionId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, started_at, ended_at, duration_minutes
            FROM sessions
            WHERE ended_at IS NULL
            ORDER BY started_at DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn update(&self, session: &Session) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET ended_at = $2, duration_minutes = $3
            WHERE id = $1
            ",
        )
        .bind(session.id.into_inner())
        .bind(session.ended_at)
        .bind(session.duration_minutes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(session.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_since(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, started_at, ended_at, duration_minutes
            FROM sessions
            WHERE started_at >= $1 OR ended_at IS NULL
            ORDER BY started_at ASC
            ",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Session::from).collect())
    }
}
