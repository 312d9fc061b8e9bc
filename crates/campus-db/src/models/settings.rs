//! Admin settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for admin_settings table
#[derive(Debug, Clone, FromRow)]
pub struct AdminSettingsModel {
    pub checkpoints_enabled: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
}
