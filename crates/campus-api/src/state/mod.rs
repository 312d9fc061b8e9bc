//! Shared handler state

use std::sync::Arc;

use campus_common::{AppConfig, FeedConfig};
use campus_db::PgPool;
use campus_service::ServiceContext;

/// Cloned into every handler; all fields are reference counted
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    /// Kept apart from the services so readiness can ping the database directly
    pool: PgPool,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, pool: PgPool, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            pool,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Page sizes and read-degradation switch for the feeds
    pub fn feed(&self) -> &FeedConfig {
        &self.config.feed
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("pool_size", &self.pool.size())
            .field("feed", &self.config.feed)
            .finish_non_exhaustive()
    }
}
