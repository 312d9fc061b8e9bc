//! Database models - SQLx-compatible structs for PostgreSQL tables

mod campus;
mod daily_update;
mod feedback;
mod profile;
mod reaction;
mod settings;

pub use campus::CollegeModel;
pub use daily_update::DailyUpdateModel;
pub use feedback::{FeedbackModel, FeedbackReplyModel};
pub use profile::ProfileModel;
pub use reaction::ReactionModel;
pub use settings::AdminSettingsModel;
