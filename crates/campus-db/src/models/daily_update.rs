//! Daily update database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for daily_updates table
#[derive(Debug, Clone, FromRow)]
pub struct DailyUpdateModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub college_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub upvote_count: i32,
}
