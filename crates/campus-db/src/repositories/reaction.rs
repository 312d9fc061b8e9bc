//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::Reaction;
use campus_core::traits::{ReactionRepository, RepoResult};

use crate::mappers::try_collect;
use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self), fields(count = target_ids.len()))]
    async fn find_by_targets(&self, target_ids: &[Uuid]) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, target_id, target_type, emoji, user_id, created_at
            FROM feedback_reactions
            WHERE target_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(target_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, reaction), fields(target_id = %reaction.target_id, emoji = %reaction.emoji))]
    async fn toggle(&self, reaction: &Reaction) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM feedback_reactions
            WHERE target_id = $1 AND user_id = $2 AND emoji = $3
            "#,
        )
        .bind(reaction.target_id)
        .bind(reaction.user_id)
        .bind(&reaction.emoji)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let added = if removed > 0 {
            false
        } else {
            // A concurrent insert of the same triple leaves the existing row
            sqlx::query(
                r#"
                INSERT INTO feedback_reactions (id, target_id, target_type, emoji, user_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (target_id, user_id, emoji) DO NOTHING
                "#,
            )
            .bind(reaction.id)
            .bind(reaction.target_id)
            .bind(reaction.target_type.as_str())
            .bind(&reaction.emoji)
            .bind(reaction.user_id)
            .bind(reaction.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
            true
        };

        tx.commit().await.map_err(map_db_error)?;
        Ok(added)
    }

    #[instrument(skip(self))]
    async fn count(&self, target_id: Uuid, emoji: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM feedback_reactions WHERE target_id = $1 AND emoji = $2",
        )
        .bind(target_id)
        .bind(emoji)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
