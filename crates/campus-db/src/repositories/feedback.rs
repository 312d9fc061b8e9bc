//! PostgreSQL implementation of FeedbackRepository
//!
//! The inbox page and its total count are built from one shared filter so
//! the count always describes exactly the rows the page is drawn from.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::FeedbackItem;
use campus_core::traits::{FeedbackRepository, RepoResult};
use campus_core::value_objects::{FeedbackQuery, FeedbackScope, FeedbackStatus, StatusFilter};
use campus_core::DomainError;

use crate::mappers::try_collect;
use crate::models::FeedbackModel;

use super::error::map_db_error;

const FEEDBACK_COLUMNS: &str =
    "id, subject, description, category, status, created_by, campus_id, created_at";

/// Append the visibility and status predicates
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, status: StatusFilter, scope: FeedbackScope) {
    builder.push(" WHERE TRUE");
    if let StatusFilter::Only(status) = status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    match scope {
        FeedbackScope::All => {}
        FeedbackScope::Campus(campus_id) => {
            builder.push(" AND campus_id = ").push_bind(campus_id);
        }
        FeedbackScope::Denied => {
            builder.push(" AND FALSE");
        }
    }
}

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackItem>> {
        let result = sqlx::query_as::<_, FeedbackModel>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FeedbackItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &FeedbackQuery) -> RepoResult<(Vec<FeedbackItem>, i64)> {
        let mut page = QueryBuilder::<Postgres>::new(format!("SELECT {FEEDBACK_COLUMNS} FROM feedback"));
        push_filters(&mut page, query.status, query.scope);
        page.push(if query.sort.is_ascending() {
            " ORDER BY created_at ASC, id ASC"
        } else {
            " ORDER BY created_at DESC, id DESC"
        });
        page.push(" LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(query.offset());

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM feedback");
        push_filters(&mut count, query.status, query.scope);

        let (rows, total) = tokio::try_join!(
            page.build_query_as::<FeedbackModel>().fetch_all(&self.pool),
            count.build_query_scalar::<i64>().fetch_one(&self.pool),
        )
        .map_err(map_db_error)?;

        Ok((try_collect(rows)?, total))
    }

    #[instrument(skip(self))]
    async fn list_statuses(&self, scope: &FeedbackScope) -> RepoResult<Vec<FeedbackStatus>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT status FROM feedback");
        push_filters(&mut builder, StatusFilter::All, *scope);

        let statuses = builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        statuses
            .into_iter()
            .map(|s| {
                s.parse()
                    .map_err(|_| DomainError::DatabaseError(format!("unexpected status value: {s}")))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<FeedbackItem>> {
        let results = sqlx::query_as::<_, FeedbackModel>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, feedback), fields(feedback_id = %feedback.id))]
    async fn create(&self, feedback: &FeedbackItem) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (id, subject, description, category, status, created_by, campus_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(feedback.id)
        .bind(&feedback.subject)
        .bind(&feedback.description)
        .bind(&feedback.category)
        .bind(feedback.status.as_str())
        .bind(feedback.created_by)
        .bind(feedback.campus_id)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: FeedbackStatus) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE feedback SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
