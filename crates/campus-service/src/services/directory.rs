//! Admin user directory
//!
//! Role assigners browse profiles 50 at a time. Coordinators see their own
//! campus only; callers who read every profile may filter by any campus.

use campus_core::{Account, DirectoryFilter, DirectoryQuery};
use tracing::instrument;

use crate::dto::{DirectoryEntryResponse, DirectoryPage};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::join::{distinct_ids, BatchJoiner};

/// User directory service
pub struct UserDirectoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserDirectoryService<'a> {
    /// Create a new UserDirectoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One directory page with each profile's campus attached
    ///
    /// Roles without `ASSIGN_ROLES` get 403, as does a coordinator without
    /// a campus. Neither case reaches the store.
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn list(&self, caller: &Account, filter: DirectoryFilter) -> ServiceResult<DirectoryPage> {
        let query = DirectoryQuery::build(filter, caller.role, caller.campus_id)?;

        let (rows, total) = self.ctx.account_repo().find_directory(&query).await?;
        let campus_ids = distinct_ids(rows.iter().filter_map(|a| a.campus_id));
        let campuses = BatchJoiner::new(self.ctx).campuses(&campus_ids).await?;

        Ok(DirectoryPage {
            users: rows
                .iter()
                .map(|account| {
                    let campus = account.campus_id.and_then(|id| campuses.get(&id));
                    DirectoryEntryResponse::from_account(account, campus)
                })
                .collect(),
            total,
            total_pages: query.total_pages(total),
        })
    }
}
