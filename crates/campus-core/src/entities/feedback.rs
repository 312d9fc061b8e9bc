//! Feedback entities - inbox items and their threaded replies

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::FeedbackStatus;

/// Maximum subject length
pub const MAX_SUBJECT_LENGTH: usize = 200;
/// Maximum description or reply length
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Feedback submitted by an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub status: FeedbackStatus,
    pub created_by: Uuid,
    /// Copied from the author's profile at submission; `None` only when the author had none
    pub campus_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl FeedbackItem {
    /// Create new feedback in the `new` status
    pub fn new(
        subject: String,
        description: String,
        category: String,
        created_by: Uuid,
        campus_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject,
            description,
            category,
            status: FeedbackStatus::New,
            created_by,
            campus_id,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_authored_by(&self, account_id: Uuid) -> bool {
        self.created_by == account_id
    }
}

/// Reply in a feedback thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReply {
    pub id: Uuid,
    pub feedback_id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    /// Posted by someone with inbox access rather than the submitter
    pub is_admin_reply: bool,
    pub created_at: DateTime<Utc>,
}

impl FeedbackReply {
    pub fn new(feedback_id: Uuid, user_id: Uuid, message: String, is_admin_reply: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            feedback_id,
            user_id,
            message,
            is_admin_reply,
            created_at: Utc::now(),
        }
    }
}
