//! Admin user directory handlers

use axum::{extract::State, Json};
use campus_service::{DirectoryPage, UserDirectoryService};

use crate::extractors::{CurrentAccount, DirectoryQueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// One page of the user directory (admins and campus coordinators)
///
/// GET /admin/users?role=&district_id=&campus_id=&search=&page=
pub async fn list_users(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    params: DirectoryQueryParams,
) -> ApiResult<Json<DirectoryPage>> {
    let filter = params.into_filter()?;
    let page = UserDirectoryService::new(state.service_context())
        .list(&caller, filter)
        .await?;
    Ok(Json(page))
}
