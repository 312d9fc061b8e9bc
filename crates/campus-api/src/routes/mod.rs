//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{accounts, daily_updates, directory, feedback, health, settings};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(feedback_routes())
        .merge(daily_update_routes())
        .merge(admin_routes())
}

fn account_routes() -> Router<AppState> {
    Router::new().route(
        "/accounts/@me",
        get(accounts::get_current_account).patch(accounts::update_current_account),
    )
}

/// Feedback inbox and thread routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(feedback::submit_feedback))
        .route("/feedback/inbox", get(feedback::get_inbox))
        .route("/feedback/stats", get(feedback::get_stats))
        .route("/feedback/mine", get(feedback::get_my_feedback))
        .route("/feedback/reactions/toggle", post(feedback::toggle_reaction))
        .route("/feedback/:feedback_id/status", patch(feedback::update_status))
        .route("/feedback/:feedback_id/thread", get(feedback::get_thread))
        .route("/feedback/:feedback_id/replies", post(feedback::post_reply))
}

/// Daily update forum routes
fn daily_update_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/daily-updates",
            get(daily_updates::search_updates).post(daily_updates::post_update),
        )
        .route("/daily-updates/mine", get(daily_updates::get_my_updates))
        .route("/daily-updates/:update_id/upvote", post(daily_updates::upvote_update))
}

/// Settings and the user directory
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/admin/users", get(directory::list_users))
}
