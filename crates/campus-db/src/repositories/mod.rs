//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in campus-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod campus;
mod daily_update;
mod error;
mod feedback;
mod reaction;
mod reply;
mod settings;

pub use account::PgAccountRepository;
pub use campus::PgCampusRepository;
pub use daily_update::PgDailyUpdateRepository;
pub use feedback::PgFeedbackRepository;
pub use reaction::PgReactionRepository;
pub use reply::PgReplyRepository;
pub use settings::PgSettingsRepository;
