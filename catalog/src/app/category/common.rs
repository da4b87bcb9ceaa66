use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId};

/// Category as returned by every category use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryModelOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryModelOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryModelOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
