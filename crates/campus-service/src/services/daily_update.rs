//! Daily update forum service
//!
//! One post per account per UTC day. Upvote counts are kept on the update
//! row; a duplicate upvote is an ordinary rejected outcome, not an error.

use campus_core::{
    utc_day_window, Account, DailyUpdate, DomainError, UpdateSearch, UpvoteAction, UpvoteOutcome, MAX_UPDATE_LENGTH,
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{DailyUpdateResponse, PostDailyUpdateRequest, UpdateSearchPage};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feedback::clean_text;
use super::join::BatchJoiner;
use super::revalidate::UPDATES_PATH;

/// How many of the caller's own updates `mine` returns
pub const MY_UPDATES_LIMIT: i64 = 200;

/// Daily update service
pub struct DailyUpdateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DailyUpdateService<'a> {
    /// Create a new DailyUpdateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search the forum as `viewer`
    #[instrument(skip(self, viewer), fields(viewer = %viewer.id))]
    pub async fn search(&self, viewer: &Account, search: UpdateSearch) -> ServiceResult<UpdateSearchPage> {
        let search = search.normalized();
        let (rows, total) = self.ctx.update_repo().search(&search).await?;
        let views = BatchJoiner::new(self.ctx).update_views(rows, viewer.id).await?;

        Ok(UpdateSearchPage {
            updates: views.into_iter().map(DailyUpdateResponse::from).collect(),
            total,
            total_pages: search.total_pages(total),
        })
    }

    /// Post today's update, stamped with the author's campus
    #[instrument(skip(self, caller, request), fields(caller = %caller.id))]
    pub async fn post(&self, caller: &Account, request: PostDailyUpdateRequest) -> ServiceResult<DailyUpdateResponse> {
        let content = clean_text("Content", &request.content, MAX_UPDATE_LENGTH)?;

        let (start, end) = utc_day_window(Utc::now().date_naive());
        if self.ctx.update_repo().exists_between(caller.id, start, end).await? {
            return Err(DomainError::AlreadyPostedToday.into());
        }

        let update = DailyUpdate::new(caller.id, content, caller.campus_id);
        self.ctx.update_repo().create(&update).await?;

        info!(update_id = %update.id, college_id = ?update.college_id, "Daily update posted");
        self.ctx.revalidate(UPDATES_PATH);

        let mut views = BatchJoiner::new(self.ctx).update_views(vec![update], caller.id).await?;
        views
            .pop()
            .map(DailyUpdateResponse::from)
            .ok_or_else(|| DomainError::InternalError("posted update vanished".to_string()).into())
    }

    /// The caller's latest updates, newest first
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn mine(&self, caller: &Account) -> ServiceResult<Vec<DailyUpdateResponse>> {
        let rows = self.ctx.update_repo().find_by_author(caller.id, MY_UPDATES_LIMIT).await?;
        let views = BatchJoiner::new(self.ctx).update_views(rows, caller.id).await?;
        Ok(views.into_iter().map(DailyUpdateResponse::from).collect())
    }

    /// Apply an upvote or its removal and report the authoritative count
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn upvote(&self, caller: &Account, update_id: Uuid, action: UpvoteAction) -> ServiceResult<UpvoteOutcome> {
        let result = match action {
            UpvoteAction::Upvote => self.ctx.update_repo().add_upvote(update_id, caller.id).await,
            UpvoteAction::Remove => self.ctx.update_repo().remove_upvote(update_id, caller.id).await,
        };

        match result {
            Ok(new_count) => {
                info!(update_id = %update_id, ?action, new_count, "Upvote applied");
                Ok(UpvoteOutcome::confirmed(new_count))
            }
            Err(DomainError::AlreadyUpvoted) => {
                warn!(update_id = %update_id, "Duplicate upvote rejected");
                Ok(UpvoteOutcome::rejected(DomainError::AlreadyUpvoted.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
