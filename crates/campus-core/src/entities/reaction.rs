//! Reaction entity - an emoji reaction on a feedback item or reply

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Emojis offered by the reaction picker
pub const REACTION_EMOJIS: [&str; 6] = ["👍", "❤️", "🎉", "😂", "😮", "😢"];

/// Kind of row a reaction points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionTarget {
    Feedback,
    Reply,
}

impl ReactionTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReactionTarget::Feedback => "feedback",
            ReactionTarget::Reply => "reply",
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feedback" => Ok(ReactionTarget::Feedback),
            "reply" => Ok(ReactionTarget::Reply),
            other => Err(format!("unknown reaction target: {other}")),
        }
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub target_id: Uuid,
    pub target_type: ReactionTarget,
    pub emoji: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(target_id: Uuid, target_type: ReactionTarget, emoji: String, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_id,
            target_type,
            emoji,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: i64,
    /// Whether the viewer is one of the reactors
    pub me: bool,
}

impl ReactionCount {
    /// Tally reactions per emoji, keeping first-seen emoji order
    pub fn tally(reactions: &[Reaction], viewer: Uuid) -> Vec<ReactionCount> {
        let mut counts: Vec<ReactionCount> = Vec::new();
        for reaction in reactions {
            let mine = reaction.user_id == viewer;
            match counts.iter_mut().find(|c| c.emoji == reaction.emoji) {
                Some(entry) => {
                    entry.count += 1;
                    entry.me |= mine;
                }
                None => counts.push(ReactionCount {
                    emoji: reaction.emoji.clone(),
                    count: 1,
                    me: mine,
                }),
            }
        }
        counts
    }
}
