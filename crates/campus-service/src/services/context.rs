//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use campus_common::auth::JwtService;
use campus_core::traits::{
    AccountRepository, CampusRepository, DailyUpdateRepository, FeedbackRepository,
    ReactionRepository, ReplyRepository, SettingsRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::revalidate::{Revalidator, TracingRevalidator};

/// Service context containing all dependencies
///
/// Services borrow it for the duration of one call. Repositories are
/// trait objects so the same services run against Postgres or an
/// in-memory store.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    campus_repo: Arc<dyn CampusRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    update_repo: Arc<dyn DailyUpdateRepository>,
    settings_repo: Arc<dyn SettingsRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    revalidator: Arc<dyn Revalidator>,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the account (profile) repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the campus repository
    pub fn campus_repo(&self) -> &dyn CampusRepository {
        self.campus_repo.as_ref()
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    /// Get the feedback reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the daily update repository
    pub fn update_repo(&self) -> &dyn DailyUpdateRepository {
        self.update_repo.as_ref()
    }

    /// Get the admin settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Mark a view stale after a successful write
    pub fn revalidate(&self, path: &str) {
        self.revalidator.revalidate(path);
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    campus_repo: Option<Arc<dyn CampusRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    update_repo: Option<Arc<dyn DailyUpdateRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    revalidator: Option<Arc<dyn Revalidator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn campus_repo(mut self, repo: Arc<dyn CampusRepository>) -> Self {
        self.campus_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn update_repo(mut self, repo: Arc<dyn DailyUpdateRepository>) -> Self {
        self.update_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Override the revalidation hook; defaults to [`TracingRevalidator`]
    pub fn revalidator(mut self, revalidator: Arc<dyn Revalidator>) -> Self {
        self.revalidator = Some(revalidator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            account_repo: self.account_repo.ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            campus_repo: self.campus_repo.ok_or_else(|| ServiceError::validation("campus_repo is required"))?,
            feedback_repo: self.feedback_repo.ok_or_else(|| ServiceError::validation("feedback_repo is required"))?,
            reply_repo: self.reply_repo.ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            reaction_repo: self.reaction_repo.ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            update_repo: self.update_repo.ok_or_else(|| ServiceError::validation("update_repo is required"))?,
            settings_repo: self.settings_repo.ok_or_else(|| ServiceError::validation("settings_repo is required"))?,
            jwt_service: self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            revalidator: self.revalidator.unwrap_or_else(|| Arc::new(TracingRevalidator)),
        })
    }
}
