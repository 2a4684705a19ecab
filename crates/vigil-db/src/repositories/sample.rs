//! PostgreSQL implementation of SampleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vigil_core::entities::PresenceSample;
use vigil_core::traits::{RepoResult, SampleRepository};

use crate::models::SampleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SampleRepository
#[derive(Clone)]
pub struct PgSampleRepository {
    pool: PgPool,
}

impl PgSampleRepository {
    /// Create a new PgSampleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SampleRepository for PgSampleRepository {
    #[instrument(skip(self))]
    async fn append(&self, sample: &PresenceSample) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO presence_samples (observed_at, state)
            VALUES ($1, $2)
            ",
        )
        .bind(sample.observed_at)
        .bind(sample.state.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_latest(&self) -> RepoResult<Option<PresenceSample>> {
        let result = sqlx::query_as::<_, SampleModel>(
            r"
            SELECT id, observed_at, state
            FROM presence_samples
            ORDER BY observed_at DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PresenceSample::from))
    }
}
