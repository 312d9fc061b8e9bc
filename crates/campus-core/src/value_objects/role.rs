//! Account role with a fixed privilege ranking
//!
//! The ranking is an immutable ordered list. Position in the list is the
//! privilege rank: later entries outrank earlier ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Participant,
    Buddy,
    QaWatcher,
    QaLead,
    CampusCoordinator,
    Admin,
}

impl Role {
    /// All roles ordered from least to most privileged
    pub const HIERARCHY: [Role; 6] = [
        Role::Participant,
        Role::Buddy,
        Role::QaWatcher,
        Role::QaLead,
        Role::CampusCoordinator,
        Role::Admin,
    ];

    /// Position of this role in the privilege ranking (0 = lowest)
    #[inline]
    pub const fn rank(self) -> usize {
        match self {
            Role::Participant => 0,
            Role::Buddy => 1,
            Role::QaWatcher => 2,
            Role::QaLead => 3,
            Role::CampusCoordinator => 4,
            Role::Admin => 5,
        }
    }

    /// Storage / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Participant => "participant",
            Role::Buddy => "buddy",
            Role::QaWatcher => "qa_watcher",
            Role::QaLead => "qa_lead",
            Role::CampusCoordinator => "campus_coordinator",
            Role::Admin => "admin",
        }
    }
}

/// Check whether `role` ranks at or above `threshold`
///
/// Used for coarse gating only. Capability checks (inbox, settings) go
/// through [`Capabilities`](super::Capabilities) instead.
#[inline]
pub fn has_minimum_role(role: Role, threshold: Role) -> bool {
    role.rank() >= threshold.rank()
}

/// Error when parsing a role from its text form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::HIERARCHY
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
