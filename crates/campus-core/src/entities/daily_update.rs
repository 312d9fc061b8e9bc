//! Daily update entity - a forum post with a denormalized upvote counter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum daily update length
pub const MAX_UPDATE_LENGTH: usize = 2000;

/// Daily update posted to the forum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyUpdate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    /// Copied from the author's profile at write time
    pub college_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub upvote_count: i32,
}

impl DailyUpdate {
    pub fn new(user_id: Uuid, content: String, college_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            college_id,
            created_at: Utc::now(),
            upvote_count: 0,
        }
    }
}

/// Upvote by one account on one update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upvote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub update_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Requested upvote mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpvoteAction {
    Upvote,
    Remove,
}

impl UpvoteAction {
    /// Action that undoes this one
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            UpvoteAction::Upvote => UpvoteAction::Remove,
            UpvoteAction::Remove => UpvoteAction::Upvote,
        }
    }
}
