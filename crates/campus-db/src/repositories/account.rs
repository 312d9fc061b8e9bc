//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use campus_core::entities::Account;
use campus_core::traits::{AccountRepository, RepoResult};
use campus_core::value_objects::DirectoryQuery;
use campus_core::DomainError;

use crate::mappers::try_collect;
use crate::models::ProfileModel;

use super::daily_update::like_pattern;
use super::error::map_db_error;

const PROFILE_COLUMNS: &str =
    "id, full_name, email, role, campus_id, district_id, bio, profile_image_url";

fn push_directory_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &DirectoryQuery) {
    builder.push(" WHERE TRUE");
    if let Some(role) = query.role {
        builder.push(" AND role = ").push_bind(role.as_str());
    }
    if let Some(district_id) = query.district_id {
        builder.push(" AND district_id = ").push_bind(district_id);
    }
    if let Some(campus_id) = query.campus_id {
        builder.push(" AND campus_id = ").push_bind(campus_id);
    }
    if let Some(search) = &query.search {
        let pattern = like_pattern(search);
        builder
            .push(" AND (full_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Account::try_from).transpose()
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Account>> {
        let results = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, account), fields(account_id = %account.id))]
    async fn update_profile(&self, account: &Account) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET full_name = $2, bio = $3, profile_image_url = $4
            WHERE id = $1
            ",
        )
        .bind(account.id)
        .bind(&account.full_name)
        .bind(&account.bio)
        .bind(&account.profile_image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AccountNotFound(account.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_directory(&self, query: &DirectoryQuery) -> RepoResult<(Vec<Account>, i64)> {
        let mut page = QueryBuilder::<Postgres>::new(format!("SELECT {PROFILE_COLUMNS} FROM profiles"));
        push_directory_filters(&mut page, query);
        page.push(" ORDER BY full_name ASC, id ASC LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(query.offset());

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM profiles");
        push_directory_filters(&mut count, query);

        let (rows, total) = tokio::try_join!(
            page.build_query_as::<ProfileModel>().fetch_all(&self.pool),
            count.build_query_scalar::<i64>().fetch_one(&self.pool),
        )
        .map_err(map_db_error)?;

        Ok((try_collect(rows)?, total))
    }
}
