//! # campus-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AccountService, BatchJoiner, DailyUpdateService, FeedbackInboxService, FeedbackThreadService, FeedbackView,
    Revalidator, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SettingsService,
    TracingRevalidator, UpdateView, UserDirectoryService,
};
