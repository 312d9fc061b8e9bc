//! Per-target toggle state machine
//!
//! ```text
//!   Idle/Confirmed/RolledBack --begin--> Pending --confirm--> Confirmed
//!                                           |
//!                                           +----rollback---> RolledBack
//! ```
//!
//! Each target id has exactly one entry. A toggle on a target that is still
//! pending is rejected, so two in-flight mutations can never race on the
//! same local counter.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use super::outcome::UpvoteOutcome;

/// Lifecycle of a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Pending {
        previous_active: bool,
        previous_count: u32,
    },
    Confirmed,
    RolledBack,
}

/// Local view of one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEntry {
    pub state: ToggleState,
    /// Whether the viewer has reacted/upvoted
    pub active: bool,
    pub count: u32,
}

impl ToggleEntry {
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ToggleState::Pending { .. })
    }
}

/// Mutation the caller must now send to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Add,
    Remove,
}

/// An optimistic toggle awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    pub target: Uuid,
    pub action: ToggleAction,
}

/// User-visible notice produced by a rollback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub target: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("Unknown toggle target: {0}")]
    UnknownTarget(Uuid),

    #[error("A toggle is already pending for {0}")]
    TogglePending(Uuid),

    #[error("No toggle is pending for {0}")]
    NotPending(Uuid),
}

/// Optimistic state for every tracked target
#[derive(Debug, Default)]
pub struct ToggleReconciler {
    entries: HashMap<Uuid, ToggleEntry>,
}

impl ToggleReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a target with its server-rendered state
    ///
    /// Re-tracking a target that is not pending replaces its entry.
    pub fn track(&mut self, target: Uuid, active: bool, count: u32) -> Result<(), ReconcileError> {
        if self.entries.get(&target).is_some_and(ToggleEntry::is_pending) {
            return Err(ReconcileError::TogglePending(target));
        }
        self.entries.insert(
            target,
            ToggleEntry {
                state: ToggleState::Idle,
                active,
                count,
            },
        );
        Ok(())
    }

    pub fn entry(&self, target: Uuid) -> Option<&ToggleEntry> {
        self.entries.get(&target)
    }

    /// Flip the local state and counter before the server answers
    pub fn begin(&mut self, target: Uuid) -> Result<PendingToggle, ReconcileError> {
        let entry = self
            .entries
            .get_mut(&target)
            .ok_or(ReconcileError::UnknownTarget(target))?;
        if entry.is_pending() {
            return Err(ReconcileError::TogglePending(target));
        }

        entry.state = ToggleState::Pending {
            previous_active: entry.active,
            previous_count: entry.count,
        };
        let action = if entry.active {
            entry.count = entry.count.saturating_sub(1);
            ToggleAction::Remove
        } else {
            entry.count = entry.count.saturating_add(1);
            ToggleAction::Add
        };
        entry.active = !entry.active;

        Ok(PendingToggle { target, action })
    }

    /// Accept the server's authoritative count
    pub fn confirm(&mut self, target: Uuid, authoritative_count: u32) -> Result<(), ReconcileError> {
        let entry = self.pending_entry(target)?;
        entry.count = authoritative_count;
        entry.state = ToggleState::Confirmed;
        Ok(())
    }

    /// Restore the pre-toggle state
    pub fn rollback(
        &mut self,
        target: Uuid,
        message: impl Into<String>,
    ) -> Result<FailureNotice, ReconcileError> {
        let entry = self.pending_entry(target)?;
        if let ToggleState::Pending {
            previous_active,
            previous_count,
        } = entry.state
        {
            entry.active = previous_active;
            entry.count = previous_count;
        }
        entry.state = ToggleState::RolledBack;

        Ok(FailureNotice {
            target,
            message: message.into(),
        })
    }

    /// Confirm or roll back from an upvote response
    ///
    /// Returns the notice to display when the server rejected the mutation.
    pub fn apply_outcome(
        &mut self,
        target: Uuid,
        outcome: &UpvoteOutcome,
    ) -> Result<Option<FailureNotice>, ReconcileError> {
        match (outcome.success, outcome.data) {
            (true, Some(data)) => {
                self.confirm(target, u32::try_from(data.new_count).unwrap_or(0))?;
                Ok(None)
            }
            (true, None) => {
                // Success without a count keeps the optimistic value
                let entry = self.pending_entry(target)?;
                entry.state = ToggleState::Confirmed;
                Ok(None)
            }
            (false, _) => {
                let message = outcome
                    .message
                    .clone()
                    .unwrap_or_else(|| "Failed to update upvote".to_string());
                self.rollback(target, message).map(Some)
            }
        }
    }

    fn pending_entry(&mut self, target: Uuid) -> Result<&mut ToggleEntry, ReconcileError> {
        let entry = self
            .entries
            .get_mut(&target)
            .ok_or(ReconcileError::UnknownTarget(target))?;
        if !entry.is_pending() {
            return Err(ReconcileError::NotPending(target));
        }
        Ok(entry)
    }
}
