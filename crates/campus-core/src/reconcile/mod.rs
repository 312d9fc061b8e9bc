//! Optimistic toggle reconciliation
//!
//! Client code flips a reaction or upvote locally before the server answers,
//! then either confirms the authoritative count or rolls back.

mod outcome;
mod toggle;

pub use outcome::{UpvoteCount, UpvoteOutcome};
pub use toggle::{
    FailureNotice, PendingToggle, ReconcileError, ToggleAction, ToggleEntry, ToggleReconciler,
    ToggleState,
};
