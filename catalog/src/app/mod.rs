//! Application layer
//!
//! Contains use cases and service orchestration.
//! Use cases coordinate between domain entities and ports.

pub mod category;

pub use category::{
    CategoryModelOutput, CreateCategory, CreateCategoryInput, CreateCategoryOutput, DeleteCategory,
    DeleteCategoryInput, GetCategory, GetCategoryInput, GetCategoryOutput, ListCategories,
    ListCategoriesInput, ListCategoriesOutput, UpdateCategory, UpdateCategoryInput,
    UpdateCategoryOutput,
};
