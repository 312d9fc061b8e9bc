mod repositories;

pub use repositories::{
    AccountRepository, CampusRepository, DailyUpdateRepository, FeedbackRepository,
    ReactionRepository, ReplyRepository, RepoResult, SettingsRepository,
};
