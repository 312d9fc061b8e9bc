//! Test fixtures and data generators
//!
//! Request bodies and the slices of response bodies the tests inspect.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Submit feedback request
#[derive(Debug, Serialize)]
pub struct SubmitFeedbackRequest {
    pub subject: String,
    pub description: String,
    pub category: String,
}

impl SubmitFeedbackRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            subject: format!("Feedback {suffix}"),
            description: "The lab projector keeps flickering".to_string(),
            category: "facilities".to_string(),
        }
    }
}

/// Feedback row as returned by submit and the inbox
#[derive(Debug, Deserialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub subject: String,
    pub status: String,
    pub created_by: String,
    pub campus_id: Option<String>,
}

/// Inbox page
#[derive(Debug, Deserialize)]
pub struct FeedbackPageResponse {
    pub data: Vec<FeedbackResponse>,
    pub total: i64,
}

/// Badge counts
#[derive(Debug, Deserialize)]
pub struct FeedbackStatsResponse {
    pub new: i64,
    pub work_in_progress: i64,
    pub completed: i64,
    pub all: i64,
}

/// Reaction toggle result
#[derive(Debug, Deserialize)]
pub struct ToggleReactionResponse {
    pub added: bool,
    pub count: i64,
}

/// Daily update as returned by post and search
#[derive(Debug, Deserialize)]
pub struct DailyUpdateResponse {
    pub id: String,
    pub content: String,
    pub upvote_count: i32,
    pub has_upvoted: bool,
}

/// Daily update search page
#[derive(Debug, Deserialize)]
pub struct UpdateSearchResponse {
    pub updates: Vec<DailyUpdateResponse>,
    pub total: i64,
    pub total_pages: i64,
}

/// One row of the admin user directory
#[derive(Debug, Deserialize)]
pub struct DirectoryEntryResponse {
    pub id: String,
    pub full_name: String,
    pub role: String,
    pub campus_id: Option<String>,
}

/// Admin user directory page
#[derive(Debug, Deserialize)]
pub struct DirectoryPageResponse {
    pub users: Vec<DirectoryEntryResponse>,
    pub total: i64,
    pub total_pages: i64,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
