//! Admin settings service

use campus_core::{can_manage_settings, Account, AdminSettings};
use tracing::{info, instrument};

use crate::dto::{SettingsResponse, UpdateSettingsRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::revalidate::SETTINGS_PATH;

/// Admin settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    /// Create a new SettingsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current settings; defaults apply until an admin saves them
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<SettingsResponse> {
        let settings = self.ctx.settings_repo().get().await?.unwrap_or_default();
        Ok(SettingsResponse::from(&settings))
    }

    /// Save the settings row (admin only)
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn update(&self, caller: &Account, request: UpdateSettingsRequest) -> ServiceResult<SettingsResponse> {
        if !can_manage_settings(caller.role) {
            return Err(ServiceError::permission_denied("MANAGE_SETTINGS"));
        }

        let settings = AdminSettings::changed_by(request.checkpoints_enabled, caller.id);
        let saved = self.ctx.settings_repo().upsert(&settings).await?;

        info!(checkpoints_enabled = saved.checkpoints_enabled, "Admin settings updated");
        self.ctx.revalidate(SETTINGS_PATH);

        Ok(SettingsResponse::from(&saved))
    }
}
