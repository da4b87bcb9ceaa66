//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryId};
use crate::domain::search::{SearchInput, SearchOutput};
use crate::error::DomainError;

/// Repository for Category aggregates
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stage a new category
    async fn insert(&self, category: &Category) -> Result<(), DomainError>;

    /// Get a category by ID
    ///
    /// Fails with `DomainError::NotFound("Category '<id>' not found")` on a miss.
    async fn get(&self, id: &CategoryId) -> Result<Category, DomainError>;

    /// Replace a stored category
    async fn update(&self, category: &Category) -> Result<(), DomainError>;

    /// Remove a stored category
    async fn delete(&self, category: &Category) -> Result<(), DomainError>;

    /// List one page of categories
    async fn search(&self, input: &SearchInput) -> Result<SearchOutput<Category>, DomainError>;
}

/// Finalises the persistence operations of one use case as a transaction
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self) -> Result<(), DomainError>;
}

/// Canonical miss message for category lookups
pub fn category_not_found(id: &CategoryId) -> DomainError {
    DomainError::NotFound(format!("Category '{}' not found", id))
}
