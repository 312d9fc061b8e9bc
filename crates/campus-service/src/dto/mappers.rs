//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities and joined views to
//! response DTOs.

use campus_core::{
    Account, AdminSettings, AuthorSummary, Campus, FeedbackItem, FeedbackReply, Reaction, ReactionCount,
};

use super::responses::{
    AuthorResponse, CollegeResponse, CurrentAccountResponse, DailyUpdateResponse, DirectoryEntryResponse, FeedbackResponse,
    FeedbackViewResponse, ReactionCountResponse, ReactionResponse, ReplyResponse, SettingsResponse,
};
use crate::services::join::{FeedbackView, UpdateView};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&AuthorSummary> for AuthorResponse {
    fn from(author: &AuthorSummary) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name.clone(),
            email: author.email.clone(),
        }
    }
}

impl From<&Account> for CurrentAccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            role: account.role,
            campus_id: account.campus_id,
            district_id: account.district_id,
            bio: account.bio.clone(),
            profile_image_url: account.profile_image_url.clone(),
            capabilities: account.capabilities(),
        }
    }
}

impl DirectoryEntryResponse {
    pub(crate) fn from_account(account: &Account, campus: Option<&Campus>) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            role: account.role,
            campus_id: account.campus_id,
            district_id: account.district_id,
            colleges: campus.map(CollegeResponse::from),
        }
    }
}

impl From<&Campus> for CollegeResponse {
    fn from(campus: &Campus) -> Self {
        Self {
            id: campus.id,
            name: campus.name.clone(),
        }
    }
}

// ============================================================================
// Feedback Mappers
// ============================================================================

impl From<&FeedbackItem> for FeedbackResponse {
    fn from(item: &FeedbackItem) -> Self {
        Self {
            id: item.id,
            subject: item.subject.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            status: item.status,
            created_by: item.created_by,
            campus_id: item.campus_id,
            created_at: item.created_at,
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            target_id: reaction.target_id,
            target_type: reaction.target_type,
            emoji: reaction.emoji.clone(),
            user_id: reaction.user_id,
        }
    }
}

impl From<ReactionCount> for ReactionCountResponse {
    fn from(count: ReactionCount) -> Self {
        Self {
            emoji: count.emoji,
            count: count.count,
            me: count.me,
        }
    }
}

impl From<FeedbackView> for FeedbackViewResponse {
    fn from(view: FeedbackView) -> Self {
        Self {
            feedback: FeedbackResponse::from(&view.feedback),
            profiles: view.author.as_ref().map(AuthorResponse::from),
            colleges: view.campus.as_ref().map(CollegeResponse::from),
            reactions: view.reactions.iter().map(ReactionResponse::from).collect(),
        }
    }
}

/// Reply with its author and the viewer's reaction tallies
pub struct ReplyWithDetails {
    pub reply: FeedbackReply,
    pub author: Option<AuthorSummary>,
    pub reactions: Vec<ReactionCount>,
}

impl From<ReplyWithDetails> for ReplyResponse {
    fn from(details: ReplyWithDetails) -> Self {
        let ReplyWithDetails {
            reply,
            author,
            reactions,
        } = details;
        Self {
            id: reply.id,
            feedback_id: reply.feedback_id,
            user_id: reply.user_id,
            message: reply.message,
            is_admin_reply: reply.is_admin_reply,
            created_at: reply.created_at,
            profiles: author.as_ref().map(AuthorResponse::from),
            reactions: reactions.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Daily Update Mappers
// ============================================================================

impl From<UpdateView> for DailyUpdateResponse {
    fn from(view: UpdateView) -> Self {
        let UpdateView {
            update,
            author,
            campus,
            has_upvoted,
        } = view;
        Self {
            id: update.id,
            user_id: update.user_id,
            content: update.content,
            college_id: update.college_id,
            created_at: update.created_at,
            upvote_count: update.upvote_count,
            profiles: author.as_ref().map(AuthorResponse::from),
            colleges: campus.as_ref().map(CollegeResponse::from),
            has_upvoted,
        }
    }
}

// ============================================================================
// Settings Mappers
// ============================================================================

impl From<&AdminSettings> for SettingsResponse {
    fn from(settings: &AdminSettings) -> Self {
        Self {
            checkpoints_enabled: settings.checkpoints_enabled,
            updated_at: settings.updated_at,
            updated_by: settings.updated_by,
        }
    }
}
