//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod accounts;
pub mod daily_updates;
pub mod directory;
pub mod feedback;
pub mod health;
pub mod settings;

use campus_service::{ServiceError, ServiceResult};
use tracing::warn;

use crate::response::ApiResult;
use crate::state::AppState;

/// Serve `fallback` instead of failing a read when the store is down
///
/// Only store failures degrade, and only while `FEEDBACK_DEGRADE_READ_ERRORS`
/// is on. Everything else still reaches the client as an error.
pub(crate) fn degrade_read<T>(
    state: &AppState,
    operation: &'static str,
    result: ServiceResult<T>,
    fallback: impl FnOnce() -> T,
) -> ApiResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if should_degrade(state.feed().degrade_read_errors, &e) => {
            warn!(operation, error = %e, "Read failed; serving empty result");
            Ok(fallback())
        }
        Err(e) => Err(e.into()),
    }
}

fn should_degrade(enabled: bool, error: &ServiceError) -> bool {
    enabled && error.is_store_failure()
}
