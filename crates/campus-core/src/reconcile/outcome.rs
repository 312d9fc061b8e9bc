//! Server-reported result of an upvote mutation

use serde::{Deserialize, Serialize};

/// Result of an upvote or upvote removal
///
/// A rejected mutation (e.g. a duplicate upvote) is reported with
/// `success: false` rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvoteOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<UpvoteCount>,
}

/// Authoritative counter after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvoteCount {
    pub new_count: i32,
}

impl UpvoteOutcome {
    pub fn confirmed(new_count: i32) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(UpvoteCount { new_count }),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
