//! Retrieval criteria for the admin user directory
//!
//! Only roles that may assign roles open the directory. Callers who read
//! every profile may filter by any campus; everyone else is pinned to
//! their own.

use uuid::Uuid;

use super::capabilities::{can_assign_roles, can_view_all_profiles};
use super::role::Role;
use crate::error::DomainError;

/// Rows per directory page
pub const DIRECTORY_PAGE_SIZE: u32 = 50;

/// Raw directory filter as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub role: Option<Role>,
    pub district_id: Option<Uuid>,
    pub campus_id: Option<Uuid>,
    /// Case-insensitive substring of the name or email
    pub search: Option<String>,
    /// 1-based page number
    pub page: u32,
}

impl Default for DirectoryFilter {
    fn default() -> Self {
        Self {
            role: None,
            district_id: None,
            campus_id: None,
            search: None,
            page: 1,
        }
    }
}

/// Fully resolved directory query, ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub role: Option<Role>,
    pub district_id: Option<Uuid>,
    pub campus_id: Option<Uuid>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl DirectoryQuery {
    /// Build the query for a caller
    ///
    /// Fails with `MissingCapability` for roles that cannot assign roles and
    /// with `NoAssignedCampus` for a campus-pinned caller without a campus.
    pub fn build(filter: DirectoryFilter, role: Role, campus_id: Option<Uuid>) -> Result<Self, DomainError> {
        if !can_assign_roles(role) {
            return Err(DomainError::MissingCapability("ASSIGN_ROLES"));
        }

        let campus_id = if can_view_all_profiles(role) {
            filter.campus_id
        } else {
            Some(campus_id.ok_or(DomainError::NoAssignedCampus)?)
        };

        Ok(Self {
            role: filter.role,
            district_id: filter.district_id,
            campus_id,
            search: filter
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            page: filter.page.max(1),
            limit: DIRECTORY_PAGE_SIZE,
        })
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: i64) -> i64 {
        let limit = i64::from(self.limit.max(1));
        (total + limit - 1) / limit
    }
}
