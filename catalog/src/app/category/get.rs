//! Get category use case

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::common::CategoryModelOutput;
use crate::domain::entities::CategoryId;
use crate::domain::ports::CategoryRepository;
use crate::error::AppError;

pub type GetCategoryOutput = CategoryModelOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryInput {
    pub id: CategoryId,
}

impl GetCategoryInput {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}

pub struct GetCategory<CR>
where
    CR: CategoryRepository,
{
    categories: Arc<CR>,
}

impl<CR> GetCategory<CR>
where
    CR: CategoryRepository,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }

    /// Look up a category; a miss surfaces the repository's not-found error
    pub async fn execute(&self, input: GetCategoryInput) -> Result<GetCategoryOutput, AppError> {
        let category = self.categories.get(&input.id).await?;
        tracing::debug!(category_id = %input.id, "Fetched category");
        Ok(CategoryModelOutput::from(category))
    }
}
