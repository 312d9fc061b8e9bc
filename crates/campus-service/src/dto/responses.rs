//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Joined views keep
//! the `profiles` / `colleges` keys the web client reads.

use campus_core::{Capabilities, FeedbackStatus, ReactionTarget, Role};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Author fields attached to joined rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
}

/// Campus fields attached to joined rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollegeResponse {
    pub id: Uuid,
    pub name: String,
}

// ============================================================================
// Account Responses
// ============================================================================

/// The authenticated caller's own profile
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAccountResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub campus_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub capabilities: Capabilities,
}

/// One row of the admin user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntryResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub campus_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub colleges: Option<CollegeResponse>,
}

/// A directory page with its exact total
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPage {
    pub users: Vec<DirectoryEntryResponse>,
    pub total: i64,
    pub total_pages: i64,
}

// ============================================================================
// Feedback Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub status: FeedbackStatus,
    pub created_by: Uuid,
    pub campus_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Raw reaction row as attached to inbox entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub id: Uuid,
    pub target_id: Uuid,
    pub target_type: ReactionTarget,
    pub emoji: String,
    pub user_id: Uuid,
}

/// Per-emoji tally with the viewer's own state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCountResponse {
    pub emoji: String,
    pub count: i64,
    pub me: bool,
}

/// Inbox row with its author, campus, and reactions resolved
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackViewResponse {
    #[serde(flatten)]
    pub feedback: FeedbackResponse,
    pub profiles: Option<AuthorResponse>,
    pub colleges: Option<CollegeResponse>,
    pub reactions: Vec<ReactionResponse>,
}

/// One page of the inbox plus the total matching the same filter
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackPage {
    pub data: Vec<FeedbackViewResponse>,
    pub total: i64,
}

impl FeedbackPage {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Badge counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackStats {
    pub new: i64,
    pub work_in_progress: i64,
    pub completed: i64,
    pub all: i64,
}

impl FeedbackStats {
    pub fn tally(statuses: &[FeedbackStatus]) -> Self {
        statuses.iter().fold(Self::default(), |mut stats, status| {
            match status {
                FeedbackStatus::New => stats.new += 1,
                FeedbackStatus::WorkInProgress => stats.work_in_progress += 1,
                FeedbackStatus::Completed => stats.completed += 1,
            }
            stats.all += 1;
            stats
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub feedback_id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub is_admin_reply: bool,
    pub created_at: DateTime<Utc>,
    pub profiles: Option<AuthorResponse>,
    pub reactions: Vec<ReactionCountResponse>,
}

/// A feedback item with its replies in posting order
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub feedback: FeedbackViewResponse,
    pub reaction_counts: Vec<ReactionCountResponse>,
    pub replies: Vec<ReplyResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleReactionResponse {
    pub added: bool,
    pub count: i64,
}

// ============================================================================
// Daily Update Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DailyUpdateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub college_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub upvote_count: i32,
    pub profiles: Option<AuthorResponse>,
    pub colleges: Option<CollegeResponse>,
    pub has_upvoted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateSearchPage {
    pub updates: Vec<DailyUpdateResponse>,
    pub total: i64,
    pub total_pages: i64,
}

impl UpdateSearchPage {
    pub fn empty() -> Self {
        Self {
            updates: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

// ============================================================================
// Settings Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsResponse {
    pub checkpoints_enabled: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
