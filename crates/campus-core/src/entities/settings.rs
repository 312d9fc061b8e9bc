//! Admin settings - the single global settings row

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Key of the only settings row
pub const GLOBAL_SETTINGS_ID: &str = "global";

/// Global admin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSettings {
    pub checkpoints_enabled: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            checkpoints_enabled: true,
            updated_at: None,
            updated_by: None,
        }
    }
}

impl AdminSettings {
    /// Settings as changed by `actor` now
    pub fn changed_by(checkpoints_enabled: bool, actor: Uuid) -> Self {
        Self {
            checkpoints_enabled,
            updated_at: Some(Utc::now()),
            updated_by: Some(actor),
        }
    }
}
