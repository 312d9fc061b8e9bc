//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids, and query
//! strings.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::CurrentAccount;
pub use path::UuidPath;
pub use query::{DirectoryQueryParams, InboxQuery, UpdateSearchQuery};
pub use validated::ValidatedJson;
