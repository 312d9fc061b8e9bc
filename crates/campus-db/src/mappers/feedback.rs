//! Feedback entity <-> model mappers

use campus_core::{DomainError, FeedbackItem, FeedbackReply, FeedbackStatus};

use super::corrupt;
use crate::models::{FeedbackModel, FeedbackReplyModel};

impl TryFrom<FeedbackModel> for FeedbackItem {
    type Error = DomainError;

    fn try_from(model: FeedbackModel) -> Result<Self, Self::Error> {
        let status: FeedbackStatus = model
            .status
            .parse()
            .map_err(|_| corrupt("status", &model.status))?;
        Ok(FeedbackItem {
            id: model.id,
            subject: model.subject,
            description: model.description,
            category: model.category,
            status,
            created_by: model.created_by,
            campus_id: model.campus_id,
            created_at: model.created_at,
        })
    }
}

impl From<FeedbackReplyModel> for FeedbackReply {
    fn from(model: FeedbackReplyModel) -> Self {
        FeedbackReply {
            id: model.id,
            feedback_id: model.feedback_id,
            user_id: model.user_id,
            message: model.message,
            is_admin_reply: model.is_admin_reply,
            created_at: model.created_at,
        }
    }
}
