//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities and joined views to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    PostDailyUpdateRequest, PostReplyRequest, SubmitFeedbackRequest, ToggleReactionRequest,
    UpdateFeedbackStatusRequest, UpdateProfileRequest, UpdateSettingsRequest, UpvoteRequest,
};

pub use responses::{
    ApiResponse, AuthorResponse, CollegeResponse, CurrentAccountResponse, DailyUpdateResponse,
    DirectoryEntryResponse, DirectoryPage,
    FeedbackPage, FeedbackResponse, FeedbackStats, FeedbackViewResponse, HealthChecks,
    HealthResponse, ReactionCountResponse, ReactionResponse, ReadinessResponse, ReplyResponse,
    SettingsResponse, ThreadResponse, ToggleReactionResponse, UpdateSearchPage,
};
