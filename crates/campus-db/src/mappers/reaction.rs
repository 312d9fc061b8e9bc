//! Reaction entity <-> model mapper

use campus_core::{DomainError, Reaction};

use super::corrupt;
use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let target_type = model
            .target_type
            .parse()
            .map_err(|_| corrupt("target_type", &model.target_type))?;
        Ok(Reaction {
            id: model.id,
            target_id: model.target_id,
            target_type,
            emoji: model.emoji,
            user_id: model.user_id,
            created_at: model.created_at,
        })
    }
}
