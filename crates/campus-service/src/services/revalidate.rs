//! Cache invalidation hook fired after successful writes

use tracing::debug;

/// Receives the path whose rendered view is stale after a mutation
pub trait Revalidator: Send + Sync {
    fn revalidate(&self, path: &str);
}

/// Default revalidator: records the invalidation in the trace stream
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRevalidator;

impl Revalidator for TracingRevalidator {
    fn revalidate(&self, path: &str) {
        debug!(path = %path, "View invalidated");
    }
}

/// Path of the feedback inbox view
pub const FEEDBACK_PATH: &str = "/feedback";

/// Path of the admin settings view
pub const SETTINGS_PATH: &str = "/admin/settings";

/// Path of the daily updates forum
pub const UPDATES_PATH: &str = "/updates";
