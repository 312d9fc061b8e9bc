//! Feedback and reply database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for feedback table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub created_by: Uuid,
    pub campus_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Database model for feedback_replies table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackReplyModel {
    pub id: Uuid,
    pub feedback_id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub is_admin_reply: bool,
    pub created_at: DateTime<Utc>,
}
