//! Admin settings handlers

use axum::{extract::State, Json};
use campus_service::{SettingsResponse, SettingsService, UpdateSettingsRequest};

use crate::extractors::{CurrentAccount, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Current admin settings
///
/// GET /admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    _caller: CurrentAccount,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = SettingsService::new(state.service_context()).get().await?;
    Ok(Json(settings))
}

/// Save admin settings (admin only)
///
/// PUT /admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = SettingsService::new(state.service_context())
        .update(&caller, request)
        .await?;
    Ok(Json(settings))
}
