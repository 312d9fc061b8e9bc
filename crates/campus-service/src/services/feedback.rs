//! Feedback inbox service
//!
//! Role-scoped inbox pages, per-status badge counts, and the author-side
//! submit / history operations.

use campus_core::{
    can_view_inbox, Account, DomainError, FeedbackItem, FeedbackQuery, FeedbackScope, FeedbackStatus, InboxFilter,
    MAX_MESSAGE_LENGTH, MAX_SUBJECT_LENGTH,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{FeedbackPage, FeedbackResponse, FeedbackStats, FeedbackViewResponse, SubmitFeedbackRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::join::BatchJoiner;
use super::revalidate::FEEDBACK_PATH;

/// Trim free text and enforce its limits
pub(crate) fn clean_text(field: &str, value: &str, max: usize) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::ContentTooLong { max }.into());
    }
    Ok(trimmed.to_string())
}

/// Feedback inbox service
pub struct FeedbackInboxService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackInboxService<'a> {
    /// Create a new FeedbackInboxService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One inbox page with authors, campuses, and reactions attached
    ///
    /// Callers without inbox access, and campus-scoped callers without a
    /// campus, get an empty page without the store being queried.
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn inbox(&self, caller: &Account, filter: InboxFilter) -> ServiceResult<FeedbackPage> {
        let Some(query) = FeedbackQuery::build(filter, caller.role, caller.campus_id) else {
            debug!(role = %caller.role, "Inbox not visible to caller");
            return Ok(FeedbackPage::empty());
        };

        let (rows, total) = self.ctx.feedback_repo().find_page(&query).await?;
        let views = BatchJoiner::new(self.ctx).feedback_views(rows).await?;

        Ok(FeedbackPage {
            data: views.into_iter().map(FeedbackViewResponse::from).collect(),
            total,
        })
    }

    /// Per-status counts over the caller's visible rows
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn stats(&self, caller: &Account) -> ServiceResult<FeedbackStats> {
        let scope = FeedbackScope::for_caller(caller.role, caller.campus_id);
        if scope.is_denied() {
            return Ok(FeedbackStats::default());
        }

        let statuses = self.ctx.feedback_repo().list_statuses(&scope).await?;
        Ok(FeedbackStats::tally(&statuses))
    }

    /// Submit feedback as the caller, stamped with the caller's campus
    #[instrument(skip(self, caller, request), fields(caller = %caller.id))]
    pub async fn submit(&self, caller: &Account, request: SubmitFeedbackRequest) -> ServiceResult<FeedbackResponse> {
        let subject = clean_text("Subject", &request.subject, MAX_SUBJECT_LENGTH)?;
        let description = clean_text("Description", &request.description, MAX_MESSAGE_LENGTH)?;
        let category = clean_text("Category", &request.category, MAX_SUBJECT_LENGTH)?;

        let item = FeedbackItem::new(subject, description, category, caller.id, caller.campus_id);
        self.ctx.feedback_repo().create(&item).await?;

        info!(feedback_id = %item.id, campus_id = ?item.campus_id, "Feedback submitted");
        self.ctx.revalidate(FEEDBACK_PATH);

        Ok(FeedbackResponse::from(&item))
    }

    /// The caller's own submissions, newest first
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn mine(&self, caller: &Account) -> ServiceResult<Vec<FeedbackResponse>> {
        let rows = self.ctx.feedback_repo().find_by_author(caller.id).await?;
        Ok(rows.iter().map(FeedbackResponse::from).collect())
    }

    /// Move a feedback item to another status
    ///
    /// Requires inbox access; items outside the caller's scope are reported
    /// as missing.
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn update_status(
        &self,
        caller: &Account,
        feedback_id: Uuid,
        status: FeedbackStatus,
    ) -> ServiceResult<FeedbackResponse> {
        if !can_view_inbox(caller.role) {
            return Err(ServiceError::permission_denied("VIEW_INBOX"));
        }

        let mut item = self
            .ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;

        let scope = FeedbackScope::for_caller(caller.role, caller.campus_id);
        if !scope.admits(item.campus_id) {
            return Err(DomainError::FeedbackNotFound(feedback_id).into());
        }

        if !self.ctx.feedback_repo().update_status(feedback_id, status).await? {
            return Err(DomainError::FeedbackNotFound(feedback_id).into());
        }
        item.status = status;

        info!(feedback_id = %feedback_id, status = %status, "Feedback status updated");
        self.ctx.revalidate(FEEDBACK_PATH);

        Ok(FeedbackResponse::from(&item))
    }
}
