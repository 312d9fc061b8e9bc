//! College database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for colleges table
#[derive(Debug, Clone, FromRow)]
pub struct CollegeModel {
    pub id: Uuid,
    pub name: String,
    pub district_id: Option<Uuid>,
}
