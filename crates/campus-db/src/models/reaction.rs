//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for feedback_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub target_id: Uuid,
    pub target_type: String,
    pub emoji: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
