//! PostgreSQL implementation of CampusRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::Campus;
use campus_core::traits::{CampusRepository, RepoResult};

use crate::models::CollegeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CampusRepository
#[derive(Clone)]
pub struct PgCampusRepository {
    pool: PgPool,
}

impl PgCampusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampusRepository for PgCampusRepository {
    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Campus>> {
        let results = sqlx::query_as::<_, CollegeModel>(
            r#"
            SELECT id, name, district_id
            FROM colleges
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Campus::from).collect())
    }
}
