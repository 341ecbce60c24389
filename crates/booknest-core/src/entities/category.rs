//! Category entity - a shelf books are filed under

use chrono::{DateTime, Utc};

use crate::value_objects::CategoryId;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category
    pub fn new(id: CategoryId, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
