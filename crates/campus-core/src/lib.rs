//! # campus-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! optimistic toggle reconciler.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod reconcile;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Account, AdminSettings, AuthorSummary, Campus, DailyUpdate, FeedbackItem, FeedbackReply,
    Reaction, ReactionCount, ReactionTarget, Upvote, UpvoteAction, GLOBAL_SETTINGS_ID,
    MAX_BIO_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_SUBJECT_LENGTH, MAX_UPDATE_LENGTH, REACTION_EMOJIS,
};
pub use error::DomainError;
pub use reconcile::{
    FailureNotice, PendingToggle, ReconcileError, ToggleAction, ToggleEntry, ToggleReconciler,
    ToggleState, UpvoteCount, UpvoteOutcome,
};
pub use traits::{
    AccountRepository, CampusRepository, DailyUpdateRepository, FeedbackRepository,
    ReactionRepository, ReplyRepository, RepoResult, SettingsRepository,
};
pub use value_objects::{
    can_assign_roles, can_manage_settings, can_view_all_feedback, can_view_all_profiles,
    can_view_inbox, can_view_scoped_feedback, has_minimum_role, utc_day_window, Capabilities,
    DirectoryFilter, DirectoryQuery, FeedbackQuery, FeedbackScope, FeedbackStatus, InboxFilter, Role, RoleParseError, SortOrder, StatusFilter, StatusParseError, UpdateSearch,
    UpdateSort, DIRECTORY_PAGE_SIZE, MAX_PAGE_SIZE, MAX_UPDATES_PAGE_SIZE,
};
