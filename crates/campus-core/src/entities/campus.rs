//! Campus entity - a college that accounts and teams belong to

use uuid::Uuid;

/// Campus (college) reference row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campus {
    pub id: Uuid,
    pub name: String,
    pub district_id: Option<Uuid>,
}

impl Campus {
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            district_id: None,
        }
    }
}
