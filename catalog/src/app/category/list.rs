//! List categories use case

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::common::CategoryModelOutput;
use crate::config::Config;
use crate::domain::ports::CategoryRepository;
use crate::domain::search::{SearchInput, SearchOrder};
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCategoriesInput {
    /// 1-based; defaults to the first page
    #[serde(default)]
    pub page: Option<usize>,
    /// Defaults to `Config::default_per_page`
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub search: Option<String>,
    /// `name` or `created_at`
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: SearchOrder,
}

impl ListCategoriesInput {
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, dir: SearchOrder) -> Self {
        self.sort = Some(field.into());
        self.dir = dir;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListCategoriesOutput {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<CategoryModelOutput>,
}

pub struct ListCategories<CR>
where
    CR: CategoryRepository,
{
    categories: Arc<CR>,
    config: Config,
}

impl<CR> ListCategories<CR>
where
    CR: CategoryRepository,
{
    pub fn new(categories: Arc<CR>, config: Config) -> Self {
        Self { categories, config }
    }

    pub async fn execute(
        &self,
        input: ListCategoriesInput,
    ) -> Result<ListCategoriesOutput, AppError> {
        let search = self.search_input(input)?;
        let page = self.categories.search(&search).await?;

        tracing::debug!(
            page = page.current_page,
            returned = page.items.len(),
            total = page.total,
            "Listed categories"
        );

        let page = page.map(CategoryModelOutput::from);
        Ok(ListCategoriesOutput {
            page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            items: page.items,
        })
    }

    fn search_input(&self, input: ListCategoriesInput) -> Result<SearchInput, AppError> {
        let page = input.page.unwrap_or(1);
        let per_page = input.per_page.unwrap_or(self.config.default_per_page);

        if page == 0 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        if per_page == 0 || per_page > self.config.max_per_page {
            return Err(AppError::BadRequest(format!(
                "per_page must be between 1 and {}",
                self.config.max_per_page
            )));
        }

        Ok(SearchInput {
            page,
            per_page,
            search: input.search,
            order_by: input.sort,
            order: input.dir,
        })
    }
}
