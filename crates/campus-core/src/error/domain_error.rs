//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("Feedback not found: {0}")]
    FeedbackNotFound(Uuid),

    #[error("Reaction target not found: {0}")]
    ReactionTargetNotFound(Uuid),

    #[error("Daily update not found: {0}")]
    UpdateNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Unsupported emoji: {0}")]
    UnsupportedEmoji(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),

    #[error("Not a participant of this feedback thread")]
    NotThreadParticipant,

    #[error("Campus coordinator has no assigned campus")]
    NoAssignedCampus,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already upvoted")]
    AlreadyUpvoted,

    #[error("Already posted an update today")]
    AlreadyPostedToday,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::FeedbackNotFound(_) => "UNKNOWN_FEEDBACK",
            Self::ReactionTargetNotFound(_) => "UNKNOWN_REACTION_TARGET",
            Self::UpdateNotFound(_) => "UNKNOWN_UPDATE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::UnsupportedEmoji(_) => "UNSUPPORTED_EMOJI",

            // Authorization
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::NotThreadParticipant => "NOT_THREAD_PARTICIPANT",
            Self::NoAssignedCampus => "NO_ASSIGNED_CAMPUS",

            // Conflict
            Self::AlreadyUpvoted => "ALREADY_UPVOTED",
            Self::AlreadyPostedToday => "ALREADY_POSTED_TODAY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::FeedbackNotFound(_)
                | Self::ReactionTargetNotFound(_)
                | Self::UpdateNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::ContentTooLong { .. } | Self::UnsupportedEmoji(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingCapability(_) | Self::NotThreadParticipant | Self::NoAssignedCampus
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyUpvoted | Self::AlreadyPostedToday)
    }

    /// Check if the store itself failed
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
