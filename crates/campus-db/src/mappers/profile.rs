//! Account entity <-> profile model mapper

use campus_core::{Account, DomainError, Role};

use super::corrupt;
use crate::models::ProfileModel;

impl TryFrom<ProfileModel> for Account {
    type Error = DomainError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        let role: Role = model.role.parse().map_err(|_| corrupt("role", &model.role))?;
        Ok(Account {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            role,
            campus_id: model.campus_id,
            district_id: model.district_id,
            bio: model.bio,
            profile_image_url: model.profile_image_url,
        })
    }
}
