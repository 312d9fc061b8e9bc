//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::FeedbackReply;
use campus_core::traits::{ReplyRepository, RepoResult};
use campus_core::DomainError;

use crate::models::FeedbackReplyModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackReply>> {
        let result = sqlx::query_as::<_, FeedbackReplyModel>(
            r#"
            SELECT id, feedback_id, user_id, message, is_admin_reply, created_at
            FROM feedback_replies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FeedbackReply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_feedback(&self, feedback_id: Uuid) -> RepoResult<Vec<FeedbackReply>> {
        let results = sqlx::query_as::<_, FeedbackReplyModel>(
            r#"
            SELECT id, feedback_id, user_id, message, is_admin_reply, created_at
            FROM feedback_replies
            WHERE feedback_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(feedback_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeedbackReply::from).collect())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn create(&self, reply: &FeedbackReply) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback_replies (id, feedback_id, user_id, message, is_admin_reply, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reply.id)
        .bind(reply.feedback_id)
        .bind(reply.user_id)
        .bind(&reply.message)
        .bind(reply.is_admin_reply)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::FeedbackNotFound(reply.feedback_id))
        })?;

        Ok(())
    }
}
