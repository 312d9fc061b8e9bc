//! Account handlers

use axum::{extract::State, Json};
use campus_service::{AccountService, CurrentAccountResponse, UpdateProfileRequest};

use crate::extractors::{CurrentAccount, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// The caller's own profile and capabilities
///
/// GET /accounts/@me
pub async fn get_current_account(CurrentAccount(account): CurrentAccount) -> Json<CurrentAccountResponse> {
    Json(CurrentAccountResponse::from(&account))
}

/// Edit the caller's name, bio, or profile image
///
/// PATCH /accounts/@me
pub async fn update_current_account(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentAccountResponse>> {
    let updated = AccountService::new(state.service_context())
        .update_profile(&account, request)
        .await?;
    Ok(Json(updated))
}
