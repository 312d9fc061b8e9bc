//! Capability flags derived from an account role
//!
//! Capabilities are a pure function of the role. Nothing registers or
//! mutates the mapping at runtime.

use bitflags::bitflags;
use serde::{Serialize, Serializer};

use super::role::Role;

bitflags! {
    /// Named capabilities granted to a role
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Open the feedback inbox at all
        const VIEW_INBOX           = 1 << 0;
        /// See feedback from every campus
        const VIEW_ALL_FEEDBACK    = 1 << 1;
        /// See feedback from the caller's own campus only
        const VIEW_SCOPED_FEEDBACK = 1 << 2;
        /// Edit team checkpoints
        const EDIT_CHECKPOINT      = 1 << 3;
        /// Assign roles to other accounts
        const ASSIGN_ROLES         = 1 << 4;
        /// Read every profile
        const VIEW_ALL_PROFILES    = 1 << 5;
        /// Change global admin settings
        const MANAGE_SETTINGS      = 1 << 6;
    }
}

impl Capabilities {
    /// Capability set for a role
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Participant => Self::empty(),
            Role::Buddy => Self::EDIT_CHECKPOINT,
            Role::QaWatcher => Self::VIEW_INBOX
                .union(Self::VIEW_ALL_FEEDBACK)
                .union(Self::VIEW_ALL_PROFILES),
            Role::QaLead => Self::VIEW_INBOX
                .union(Self::VIEW_ALL_FEEDBACK)
                .union(Self::VIEW_ALL_PROFILES)
                .union(Self::EDIT_CHECKPOINT),
            Role::CampusCoordinator => Self::VIEW_INBOX
                .union(Self::VIEW_SCOPED_FEEDBACK)
                .union(Self::ASSIGN_ROLES),
            Role::Admin => Self::all(),
        }
    }

    /// Names of the capabilities that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.list().serialize(serializer)
    }
}

/// Whether the role may open the feedback inbox
#[inline]
pub fn can_view_inbox(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::VIEW_INBOX)
}

/// Whether the role sees feedback from all campuses
#[inline]
pub fn can_view_all_feedback(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::VIEW_ALL_FEEDBACK)
}

/// Whether the role sees feedback restricted to its own campus
#[inline]
pub fn can_view_scoped_feedback(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::VIEW_SCOPED_FEEDBACK)
}

/// Whether the role may open the user directory and assign roles
#[inline]
pub fn can_assign_roles(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::ASSIGN_ROLES)
}

/// Whether the role reads profiles across every campus
#[inline]
pub fn can_view_all_profiles(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::VIEW_ALL_PROFILES)
}

/// Whether the role may change admin settings
#[inline]
pub fn can_manage_settings(role: Role) -> bool {
    Capabilities::for_role(role).contains(Capabilities::MANAGE_SETTINGS)
}
