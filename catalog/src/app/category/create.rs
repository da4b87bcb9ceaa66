//! Create category use case

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::common::CategoryModelOutput;
use crate::domain::entities::Category;
use crate::domain::ports::{CategoryRepository, Clock, UnitOfWork};
use crate::error::AppError;

pub type CreateCategoryOutput = CategoryModelOutput;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    /// Input for an active category
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            is_active: true,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

pub struct CreateCategory<CR, UW, CL>
where
    CR: CategoryRepository,
    UW: UnitOfWork,
    CL: Clock,
{
    categories: Arc<CR>,
    unit_of_work: Arc<UW>,
    clock: Arc<CL>,
}

impl<CR, UW, CL> CreateCategory<CR, UW, CL>
where
    CR: CategoryRepository,
    UW: UnitOfWork,
    CL: Clock,
{
    pub fn new(categories: Arc<CR>, unit_of_work: Arc<UW>, clock: Arc<CL>) -> Self {
        Self {
            categories,
            unit_of_work,
            clock,
        }
    }

    /// Validate, insert and commit a new category
    ///
    /// Validation errors are returned unchanged and nothing is persisted.
    pub async fn execute(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CreateCategoryOutput, AppError> {
        let category = Category::with_created_at(
            &input.name,
            input.description.as_deref(),
            input.is_active,
            self.clock.now(),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected new category");
            e
        })?;

        self.categories.insert(&category).await?;
        self.unit_of_work.commit().await?;

        tracing::info!(category_id = %category.id(), name = category.name(), "Created category");
        Ok(CategoryModelOutput::from(category))
    }
}
