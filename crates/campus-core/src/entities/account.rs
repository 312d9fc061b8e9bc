//! Account entity - a provisioned user profile

use uuid::Uuid;

use crate::value_objects::{Capabilities, Role};

/// Maximum display name length in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum bio length in characters
pub const MAX_BIO_LENGTH: usize = 1000;

/// Account profile
///
/// Accounts are provisioned by the external identity provider. Owners may
/// edit their display name, bio, and image; role and affiliation are not
/// changed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub campus_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

impl Account {
    /// Create an account with the required fields
    pub fn new(id: Uuid, full_name: String, role: Role) -> Self {
        Self {
            id,
            full_name,
            email: None,
            role,
            campus_id: None,
            district_id: None,
            bio: None,
            profile_image_url: None,
        }
    }

    /// Capabilities granted by this account's role
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(self.role)
    }

    /// Short public view used when joining onto other rows
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Author fields attached to joined views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
}
