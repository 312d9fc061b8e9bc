//! Integration test utilities for the campus API
//!
//! Spawns the real router against PostgreSQL and seeds accounts directly,
//! since sign-in belongs to the identity provider.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
