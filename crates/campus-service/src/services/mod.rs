//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod context;
pub mod daily_update;
pub mod directory;
pub mod error;
pub mod feedback;
pub mod join;
pub mod revalidate;
pub mod settings;
pub mod thread;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use account::AccountService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use daily_update::{DailyUpdateService, MY_UPDATES_LIMIT};
pub use directory::UserDirectoryService;
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackInboxService;
pub use join::{BatchJoiner, FeedbackView, UpdateView};
pub use revalidate::{Revalidator, TracingRevalidator};
pub use settings::SettingsService;
pub use thread::FeedbackThreadService;
