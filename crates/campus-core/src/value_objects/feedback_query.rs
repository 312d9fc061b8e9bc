//! Retrieval criteria for the feedback inbox
//!
//! A caller's role and campus decide the visibility scope. The same scope
//! drives both the paginated inbox query and the per-status counters, so the
//! two can never disagree about which rows are visible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::capabilities::{can_view_all_feedback, can_view_inbox, can_view_scoped_feedback};
use super::role::Role;

/// Maximum inbox page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Lifecycle status of a feedback item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    New,
    WorkInProgress,
    Completed,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::New,
        FeedbackStatus::WorkInProgress,
        FeedbackStatus::Completed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
            FeedbackStatus::WorkInProgress => "work_in_progress",
            FeedbackStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status or filter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback status: {0}")]
pub struct StatusParseError(pub String);

impl FromStr for FeedbackStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

/// Status filter for the inbox ("all" or one status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeedbackStatus),
}

impl FromStr for StatusFilter {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

/// Creation-time ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Parse leniently; anything other than "oldest" sorts newest first
    pub fn parse_lenient(s: &str) -> Self {
        if s == "oldest" {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        }
    }

    #[inline]
    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Oldest)
    }
}

/// Which feedback rows a caller may see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackScope {
    /// Every row
    All,
    /// Rows whose campus id equals this one
    Campus(Uuid),
    /// Nothing; the store must not be queried
    Denied,
}

impl FeedbackScope {
    /// Resolve the scope for a caller
    pub fn for_caller(role: Role, campus_id: Option<Uuid>) -> Self {
        if !can_view_inbox(role) {
            return FeedbackScope::Denied;
        }
        if can_view_all_feedback(role) {
            return FeedbackScope::All;
        }
        if can_view_scoped_feedback(role) {
            return campus_id.map_or(FeedbackScope::Denied, FeedbackScope::Campus);
        }
        FeedbackScope::Denied
    }

    #[inline]
    pub fn is_denied(&self) -> bool {
        matches!(self, FeedbackScope::Denied)
    }

    /// Whether a row with the given campus id falls inside this scope
    pub fn admits(&self, campus_id: Option<Uuid>) -> bool {
        match self {
            FeedbackScope::All => true,
            FeedbackScope::Campus(id) => campus_id == Some(*id),
            FeedbackScope::Denied => false,
        }
    }
}

/// Raw inbox filter as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxFilter {
    pub status: StatusFilter,
    pub sort: SortOrder,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
}

impl Default for InboxFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            sort: SortOrder::Newest,
            page: 1,
            limit: 10,
        }
    }
}

/// Fully resolved inbox query, ready for the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackQuery {
    pub status: StatusFilter,
    pub sort: SortOrder,
    pub page: u32,
    pub limit: u32,
    /// Never `Denied`
    pub scope: FeedbackScope,
}

impl FeedbackQuery {
    /// Build the query for a caller
    ///
    /// Returns `None` when the caller can see nothing, in which case the
    /// result is empty and the store is not touched.
    pub fn build(filter: InboxFilter, role: Role, campus_id: Option<Uuid>) -> Option<Self> {
        let scope = FeedbackScope::for_caller(role, campus_id);
        if scope.is_denied() {
            return None;
        }

        Some(Self {
            status: filter.status,
            sort: filter.sort,
            page: filter.page.max(1),
            limit: filter.limit.clamp(1, MAX_PAGE_SIZE),
            scope,
        })
    }

    /// Index of the first row on this page
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// Inclusive row range `[offset, offset + limit - 1]`
    pub fn range(&self) -> (i64, i64) {
        let from = self.offset();
        (from, from + i64::from(self.limit) - 1)
    }
}
