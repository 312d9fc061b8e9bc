//! Admin settings entity <-> model mapper

use campus_core::AdminSettings;

use crate::models::AdminSettingsModel;

impl From<AdminSettingsModel> for AdminSettings {
    fn from(model: AdminSettingsModel) -> Self {
        AdminSettings {
            checkpoints_enabled: model.checkpoints_enabled,
            updated_at: model.updated_at,
            updated_by: model.updated_by,
        }
    }
}
