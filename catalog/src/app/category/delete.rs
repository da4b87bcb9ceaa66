//! Delete category use case

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::CategoryId;
use crate::domain::ports::{CategoryRepository, UnitOfWork};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: CategoryId,
}

impl DeleteCategoryInput {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}

pub struct DeleteCategory<CR, UW>
where
    CR: CategoryRepository,
    UW: UnitOfWork,
{
    categories: Arc<CR>,
    unit_of_work: Arc<UW>,
}

impl<CR, UW> DeleteCategory<CR, UW>
where
    CR: CategoryRepository,
    UW: UnitOfWork,
{
    pub fn new(categories: Arc<CR>, unit_of_work: Arc<UW>) -> Self {
        Self {
            categories,
            unit_of_work,
        }
    }

    pub async fn execute(&self, input: DeleteCategoryInput) -> Result<(), AppError> {
        let category = self.categories.get(&input.id).await?;
        self.categories.delete(&category).await?;
        self.unit_of_work.commit().await?;

        tracing::info!(category_id = %input.id, "Deleted category");
        Ok(())
    }
}
