//! Daily update entity <-> model mapper

use campus_core::DailyUpdate;

use crate::models::DailyUpdateModel;

impl From<DailyUpdateModel> for DailyUpdate {
    fn from(model: DailyUpdateModel) -> Self {
        DailyUpdate {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            college_id: model.college_id,
            created_at: model.created_at,
            upvote_count: model.upvote_count,
        }
    }
}
