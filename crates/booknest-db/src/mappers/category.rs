//! Category model -> entity mapper

use booknest_core::entities::Category;
use booknest_core::value_objects::CategoryId;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::new(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
