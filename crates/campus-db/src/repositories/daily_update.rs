//! PostgreSQL implementation of DailyUpdateRepository
//!
//! `upvote_count` is a denormalized counter. Each upvote mutation changes the
//! vote row and the counter inside one transaction, and the unique
//! (user_id, update_id) constraint rejects double votes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::DailyUpdate;
use campus_core::traits::{DailyUpdateRepository, RepoResult};
use campus_core::value_objects::{UpdateSearch, UpdateSort};
use campus_core::DomainError;

use crate::models::DailyUpdateModel;

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

const UPDATE_COLUMNS: &str = "id, user_id, content, college_id, created_at, upvote_count";

/// Escape LIKE wildcards so the keyword matches literally
pub(super) fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn push_search_filters(builder: &mut QueryBuilder<'_, Postgres>, search: &UpdateSearch) {
    builder.push(" WHERE TRUE");
    if let Some(keyword) = &search.keyword {
        builder
            .push(" AND content ILIKE ")
            .push_bind(like_pattern(keyword));
    }
    if let Some(college) = &search.college {
        builder
            .push(" AND college_id IN (SELECT id FROM colleges WHERE name = ")
            .push_bind(college.clone())
            .push(")");
    }
    if let Some((start, end)) = search.date_window() {
        builder
            .push(" AND created_at >= ")
            .push_bind(start)
            .push(" AND created_at < ")
            .push_bind(end);
    }
}

fn order_clause(sort: UpdateSort) -> &'static str {
    match sort {
        UpdateSort::Recent => " ORDER BY created_at DESC, id DESC",
        UpdateSort::Oldest => " ORDER BY created_at ASC, id ASC",
        UpdateSort::Upvotes => " ORDER BY upvote_count DESC, created_at DESC, id DESC",
    }
}

/// PostgreSQL implementation of DailyUpdateRepository
#[derive(Clone)]
pub struct PgDailyUpdateRepository {
    pool: PgPool,
}

impl PgDailyUpdateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyUpdateRepository for PgDailyUpdateRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DailyUpdate>> {
        let result = sqlx::query_as::<_, DailyUpdateModel>(&format!(
            "SELECT {UPDATE_COLUMNS} FROM daily_updates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DailyUpdate::from))
    }

    #[instrument(skip(self))]
    async fn search(&self, search: &UpdateSearch) -> RepoResult<(Vec<DailyUpdate>, i64)> {
        let mut page =
            QueryBuilder::<Postgres>::new(format!("SELECT {UPDATE_COLUMNS} FROM daily_updates"));
        push_search_filters(&mut page, search);
        page.push(order_clause(search.sort))
            .push(" LIMIT ")
            .push_bind(i64::from(search.limit))
            .push(" OFFSET ")
            .push_bind(search.offset());

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM daily_updates");
        push_search_filters(&mut count, search);

        let (rows, total) = tokio::try_join!(
            page.build_query_as::<DailyUpdateModel>().fetch_all(&self.pool),
            count.build_query_scalar::<i64>().fetch_one(&self.pool),
        )
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(DailyUpdate::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn exists_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM daily_updates
                WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            )
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, update), fields(update_id = %update.id))]
    async fn create(&self, update: &DailyUpdate) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_updates (id, user_id, content, college_id, created_at, upvote_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(update.id)
        .bind(update.user_id)
        .bind(&update.content)
        .bind(update.college_id)
        .bind(update.created_at)
        .bind(update.upvote_count)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyPostedToday))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<DailyUpdate>> {
        let results = sqlx::query_as::<_, DailyUpdateModel>(&format!(
            "SELECT {UPDATE_COLUMNS} FROM daily_updates WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DailyUpdate::from).collect())
    }

    #[instrument(skip(self), fields(count = update_ids.len()))]
    async fn find_upvoted(&self, user_id: Uuid, update_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT update_id FROM daily_update_upvotes
            WHERE user_id = $1 AND update_id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(update_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn add_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO daily_update_upvotes (id, user_id, update_id, created_at)
            VALUES ($1, $2, $3, now())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(update_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                map_unique_violation(e, || DomainError::AlreadyUpvoted)
            } else {
                map_foreign_key_violation(e, || DomainError::UpdateNotFound(update_id))
            }
        })?;

        let count = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE daily_updates SET upvote_count = upvote_count + 1
            WHERE id = $1
            RETURNING upvote_count
            "#,
        )
        .bind(update_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::UpdateNotFound(update_id))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn remove_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            "DELETE FROM daily_update_upvotes WHERE user_id = $1 AND update_id = $2",
        )
        .bind(user_id)
        .bind(update_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let sql = if removed > 0 {
            r#"
            UPDATE daily_updates SET upvote_count = GREATEST(upvote_count - 1, 0)
            WHERE id = $1
            RETURNING upvote_count
            "#
        } else {
            "SELECT upvote_count FROM daily_updates WHERE id = $1"
        };

        let count = sqlx::query_scalar::<_, i32>(sql)
            .bind(update_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::UpdateNotFound(update_id))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(count)
    }
}
