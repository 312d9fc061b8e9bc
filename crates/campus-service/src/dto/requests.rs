//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use campus_core::{FeedbackStatus, ReactionTarget, UpvoteAction};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// Edit the caller's own profile; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: Option<String>,

    /// Blank clears the bio
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    #[validate(
        url(message = "Profile image must be a valid URL"),
        length(max = 2048, message = "Profile image URL must be at most 2048 characters")
    )]
    pub profile_image_url: Option<String>,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Submit a new feedback item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,
}

/// Move a feedback item to another status
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpdateFeedbackStatusRequest {
    pub status: FeedbackStatus,
}

/// Reply on a feedback thread
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostReplyRequest {
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Toggle an emoji reaction on a feedback item or reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleReactionRequest {
    pub target_id: Uuid,

    pub target_kind: ReactionTarget,

    #[validate(length(min = 1, max = 16, message = "Emoji must be 1-16 characters"))]
    pub emoji: String,
}

// ============================================================================
// Daily Update Requests
// ============================================================================

/// Post today's update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostDailyUpdateRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Upvote or withdraw an upvote
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpvoteRequest {
    pub action: UpvoteAction,
}

// ============================================================================
// Settings Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    pub checkpoints_enabled: bool,
}
