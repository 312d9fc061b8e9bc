//! PostgreSQL implementation of SettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{AdminSettings, GLOBAL_SETTINGS_ID};
use campus_core::traits::{RepoResult, SettingsRepository};

use crate::models::AdminSettingsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> RepoResult<Option<AdminSettings>> {
        let result = sqlx::query_as::<_, AdminSettingsModel>(
            r#"
            SELECT checkpoints_enabled, updated_at, updated_by
            FROM admin_settings
            WHERE id = $1
            "#,
        )
        .bind(GLOBAL_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AdminSettings::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, settings: &AdminSettings) -> RepoResult<AdminSettings> {
        let saved = sqlx::query_as::<_, AdminSettingsModel>(
            r#"
            INSERT INTO admin_settings (id, checkpoints_enabled, updated_at, updated_by)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET checkpoints_enabled = EXCLUDED.checkpoints_enabled,
                updated_at = EXCLUDED.updated_at,
                updated_by = EXCLUDED.updated_by
            RETURNING checkpoints_enabled, updated_at, updated_by
            "#,
        )
        .bind(GLOBAL_SETTINGS_ID)
        .bind(settings.checkpoints_enabled)
        .bind(settings.updated_at)
        .bind(settings.updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AdminSettings::from(saved))
    }
}
