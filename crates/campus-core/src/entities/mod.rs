//! Domain entities

mod account;
mod campus;
mod daily_update;
mod feedback;
mod reaction;
mod settings;

pub use account::{Account, AuthorSummary, MAX_BIO_LENGTH, MAX_NAME_LENGTH};
pub use campus::Campus;
pub use daily_update::{DailyUpdate, Upvote, UpvoteAction, MAX_UPDATE_LENGTH};
pub use feedback::{FeedbackItem, FeedbackReply, MAX_MESSAGE_LENGTH, MAX_SUBJECT_LENGTH};
pub use reaction::{Reaction, ReactionCount, ReactionTarget, REACTION_EMOJIS};
pub use settings::{AdminSettings, GLOBAL_SETTINGS_ID};
