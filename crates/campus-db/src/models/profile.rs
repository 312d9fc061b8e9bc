//! Profile database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub role: String,
    pub campus_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}
