//! Daily update forum handlers

use axum::{extract::State, Json};
use campus_core::UpvoteOutcome;
use campus_service::{DailyUpdateResponse, DailyUpdateService, PostDailyUpdateRequest, UpdateSearchPage, UpvoteRequest};
use uuid::Uuid;

use super::degrade_read;
use crate::extractors::{CurrentAccount, UpdateSearchQuery, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Search the forum
///
/// GET /daily-updates?keyword=&college=&date=&sort=&page=&limit=
pub async fn search_updates(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    query: UpdateSearchQuery,
) -> ApiResult<Json<UpdateSearchPage>> {
    let search = query.into_search(state.feed().updates_page_size)?;
    let result = DailyUpdateService::new(state.service_context())
        .search(&caller, search)
        .await;
    let page = degrade_read(&state, "daily_update_search", result, UpdateSearchPage::empty)?;
    Ok(Json(page))
}

/// Post today's update
///
/// POST /daily-updates
pub async fn post_update(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    ValidatedJson(request): ValidatedJson<PostDailyUpdateRequest>,
) -> ApiResult<Created<DailyUpdateResponse>> {
    let update = DailyUpdateService::new(state.service_context())
        .post(&caller, request)
        .await?;
    Ok(Created(update))
}

/// The caller's latest updates
///
/// GET /daily-updates/mine
pub async fn get_my_updates(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
) -> ApiResult<Json<Vec<DailyUpdateResponse>>> {
    let updates = DailyUpdateService::new(state.service_context()).mine(&caller).await?;
    Ok(Json(updates))
}

/// Upvote or withdraw an upvote
///
/// POST /daily-updates/:update_id/upvote
///
/// A duplicate upvote answers 200 with `success: false`.
pub async fn upvote_update(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    UuidPath(update_id): UuidPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpvoteRequest>,
) -> ApiResult<Json<UpvoteOutcome>> {
    let outcome = DailyUpdateService::new(state.service_context())
        .upvote(&caller, update_id, request.action)
        .await?;
    Ok(Json(outcome))
}
