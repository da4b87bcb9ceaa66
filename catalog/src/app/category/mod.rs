//! Category use cases
//!
//! Each use case owns its ports and exposes a single `execute`.

pub mod common;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use common::CategoryModelOutput;
pub use create::{CreateCategory, CreateCategoryInput, CreateCategoryOutput};
pub use delete::{DeleteCategory, DeleteCategoryInput};
pub use get::{GetCategory, GetCategoryInput, GetCategoryOutput};
pub use list::{ListCategories, ListCategoriesInput, ListCategoriesOutput};
pub use update::{UpdateCategory, UpdateCategoryInput, UpdateCategoryOutput};
