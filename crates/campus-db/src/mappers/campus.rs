//! Campus entity <-> college model mapper

use campus_core::Campus;

use crate::models::CollegeModel;

impl From<CollegeModel> for Campus {
    fn from(model: CollegeModel) -> Self {
        Campus {
            id: model.id,
            name: model.name,
            district_id: model.district_id,
        }
    }
}
