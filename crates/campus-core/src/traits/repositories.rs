//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Batch lookups take id slices and never
//! expect to be called with an empty slice.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Account, AdminSettings, Campus, DailyUpdate, FeedbackItem, FeedbackReply, Reaction,
};
use crate::error::DomainError;
use crate::value_objects::{DirectoryQuery, FeedbackQuery, FeedbackScope, FeedbackStatus, UpdateSearch};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Account>>;

    /// Find accounts by IDs; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Account>>;

    /// Save the owner-editable profile fields (name, bio, image)
    async fn update_profile(&self, account: &Account) -> RepoResult<()>;

    /// One directory page ordered by name, plus the total match count
    async fn find_directory(&self, query: &DirectoryQuery) -> RepoResult<(Vec<Account>, i64)>;
}

// ============================================================================
// Campus Repository
// ============================================================================

#[async_trait]
pub trait CampusRepository: Send + Sync {
    /// Find campuses by IDs; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Campus>>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Find feedback by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackItem>>;

    /// One page of feedback plus the total row count under the same filter
    async fn find_page(&self, query: &FeedbackQuery) -> RepoResult<(Vec<FeedbackItem>, i64)>;

    /// Status of every row visible in `scope`
    async fn list_statuses(&self, scope: &FeedbackScope) -> RepoResult<Vec<FeedbackStatus>>;

    /// Feedback submitted by an account, newest first
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<FeedbackItem>>;

    /// Create new feedback
    async fn create(&self, feedback: &FeedbackItem) -> RepoResult<()>;

    /// Set the status; returns false when no row matched
    async fn update_status(&self, id: Uuid, status: FeedbackStatus) -> RepoResult<bool>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find reply by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackReply>>;

    /// Replies of a feedback item, oldest first
    async fn find_by_feedback(&self, feedback_id: Uuid) -> RepoResult<Vec<FeedbackReply>>;

    /// Create a new reply
    async fn create(&self, reply: &FeedbackReply) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Reactions whose target id is one of `target_ids`
    async fn find_by_targets(&self, target_ids: &[Uuid]) -> RepoResult<Vec<Reaction>>;

    /// Add the reaction, or remove it if the same (target, user, emoji)
    /// already exists. Returns true when added.
    async fn toggle(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Number of reactions with `emoji` on a target
    async fn count(&self, target_id: Uuid, emoji: &str) -> RepoResult<i64>;
}

// ============================================================================
// Daily Update Repository
// ============================================================================

#[async_trait]
pub trait DailyUpdateRepository: Send + Sync {
    /// Find update by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DailyUpdate>>;

    /// One page of matching updates plus the total match count
    async fn search(&self, search: &UpdateSearch) -> RepoResult<(Vec<DailyUpdate>, i64)>;

    /// Whether the account posted within `[start, end)`
    async fn exists_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Create a new update
    async fn create(&self, update: &DailyUpdate) -> RepoResult<()>;

    /// An account's updates, newest first
    async fn find_by_author(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<DailyUpdate>>;

    /// Which of `update_ids` the account has upvoted
    async fn find_upvoted(&self, user_id: Uuid, update_ids: &[Uuid]) -> RepoResult<Vec<Uuid>>;

    /// Record an upvote and bump the counter; returns the new count
    ///
    /// Fails with [`DomainError::AlreadyUpvoted`] when the account already
    /// upvoted this update.
    async fn add_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32>;

    /// Remove an upvote and decrement the counter (floored at zero);
    /// returns the new count
    async fn remove_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The global settings row, if it exists
    async fn get(&self) -> RepoResult<Option<AdminSettings>>;

    /// Insert or replace the global settings row
    async fn upsert(&self, settings: &AdminSettings) -> RepoResult<AdminSettings>;
}
