//! Value objects - immutable types that represent domain concepts

mod capabilities;
mod directory_query;
mod feedback_query;
mod role;
mod update_query;

pub use capabilities::{
    can_assign_roles, can_manage_settings, can_view_all_feedback, can_view_all_profiles,
    can_view_inbox, can_view_scoped_feedback, Capabilities,
};
pub use directory_query::{DirectoryFilter, DirectoryQuery, DIRECTORY_PAGE_SIZE};
pub use feedback_query::{
    FeedbackQuery, FeedbackScope, FeedbackStatus, InboxFilter, SortOrder, StatusFilter,
    StatusParseError, MAX_PAGE_SIZE,
};
pub use role::{has_minimum_role, Role, RoleParseError};
pub use update_query::{utc_day_window, UpdateSearch, UpdateSort, MAX_UPDATES_PAGE_SIZE};
