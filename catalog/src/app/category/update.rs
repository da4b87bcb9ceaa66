//! Update category use case

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::common::CategoryModelOutput;
use crate::domain::entities::CategoryId;
use crate::domain::ports::{CategoryRepository, UnitOfWork};
use crate::error::AppError;

pub type UpdateCategoryOutput = CategoryModelOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: CategoryId,
    pub name: String,
    /// `None` keeps the current description
    #[serde(default)]
    pub description: Option<String>,
    /// `None` keeps the current flag
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

pub struct UpdateCategory<CR, UW>
where
    CR: CategoryRepository,
    UW: UnitOfWork,
{
    categories: Arc<CR>,
    unit_of_work: Arc<UW>,
}

impl<CR, UW> UpdateCategory<CR, UW>
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

    /// Apply new values to a stored category
    ///
    /// The stored category is only replaced once every supplied value passed
    /// validation.
    pub async fn execute(
        &self,
        input: UpdateCategoryInput,
    ) -> Result<UpdateCategoryOutput, AppError> {
        let mut category = self.categories.get(&input.id).await?;

        category
            .update(&input.name, input.description.as_deref())
            .map_err(|e| {
                tracing::warn!(category_id = %input.id, error = %e, "Rejected category update");
                e
            })?;
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.categories.update(&category).await?;
        self.unit_of_work.commit().await?;

        tracing::info!(category_id = %category.id(), "Updated category");
        Ok(CategoryModelOutput::from(category))
    }
}
