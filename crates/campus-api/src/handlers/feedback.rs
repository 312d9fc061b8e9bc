//! Feedback handlers
//!
//! Inbox, badge counts, threads, replies, and reactions.

use axum::{extract::State, Json};
use campus_service::{
    FeedbackInboxService, FeedbackPage, FeedbackResponse, FeedbackStats, FeedbackThreadService, PostReplyRequest,
    ReplyResponse, SubmitFeedbackRequest, ThreadResponse, ToggleReactionRequest, ToggleReactionResponse,
    UpdateFeedbackStatusRequest,
};
use uuid::Uuid;

use super::degrade_read;
use crate::extractors::{CurrentAccount, InboxQuery, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// One page of the caller's inbox
///
/// GET /feedback/inbox?status=&page=&limit=&sort=
pub async fn get_inbox(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    query: InboxQuery,
) -> ApiResult<Json<FeedbackPage>> {
    let filter = query.into_filter(state.feed().feedback_page_size)?;
    let result = FeedbackInboxService::new(state.service_context())
        .inbox(&caller, filter)
        .await;
    let page = degrade_read(&state, "feedback_inbox", result, FeedbackPage::empty)?;
    Ok(Json(page))
}

/// Per-status badge counts
///
/// GET /feedback/stats
pub async fn get_stats(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
) -> ApiResult<Json<FeedbackStats>> {
    let result = FeedbackInboxService::new(state.service_context()).stats(&caller).await;
    let stats = degrade_read(&state, "feedback_stats", result, FeedbackStats::default)?;
    Ok(Json(stats))
}

/// Submit feedback
///
/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    ValidatedJson(request): ValidatedJson<SubmitFeedbackRequest>,
) -> ApiResult<Created<FeedbackResponse>> {
    let created = FeedbackInboxService::new(state.service_context())
        .submit(&caller, request)
        .await?;
    Ok(Created(created))
}

/// The caller's own submissions
///
/// GET /feedback/mine
pub async fn get_my_feedback(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let rows = FeedbackInboxService::new(state.service_context()).mine(&caller).await?;
    Ok(Json(rows))
}

/// Change a feedback item's status
///
/// PATCH /feedback/:feedback_id/status
pub async fn update_status(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    UuidPath(feedback_id): UuidPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateFeedbackStatusRequest>,
) -> ApiResult<Json<FeedbackResponse>> {
    let updated = FeedbackInboxService::new(state.service_context())
        .update_status(&caller, feedback_id, request.status)
        .await?;
    Ok(Json(updated))
}

/// Feedback item with replies and reactions
///
/// GET /feedback/:feedback_id/thread
pub async fn get_thread(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    UuidPath(feedback_id): UuidPath<Uuid>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread = FeedbackThreadService::new(state.service_context())
        .thread(&caller, feedback_id)
        .await?;
    Ok(Json(thread))
}

/// Reply on a thread
///
/// POST /feedback/:feedback_id/replies
pub async fn post_reply(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    UuidPath(feedback_id): UuidPath<Uuid>,
    ValidatedJson(request): ValidatedJson<PostReplyRequest>,
) -> ApiResult<Created<ReplyResponse>> {
    let reply = FeedbackThreadService::new(state.service_context())
        .reply(&caller, feedback_id, request)
        .await?;
    Ok(Created(reply))
}

/// Add or remove the caller's reaction
///
/// POST /feedback/reactions/toggle
pub async fn toggle_reaction(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    let outcome = FeedbackThreadService::new(state.service_context())
        .toggle_reaction(&caller, request)
        .await?;
    Ok(Json(outcome))
}
