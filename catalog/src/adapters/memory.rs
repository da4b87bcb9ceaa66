//! In-memory adapters
//!
//! A process-local `CategoryRepository` and `UnitOfWork`. Writes land in the
//! map immediately; the unit of work only counts commits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::{category_not_found, CategoryRepository, UnitOfWork};
use crate::domain::search::{SearchInput, SearchOrder, SearchOutput};
use crate::error::DomainError;

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Database("category store lock poisoned".to_string())
}

#[derive(Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a category
    pub fn with_category(self, category: Category) -> Self {
        if let Ok(mut categories) = self.categories.write() {
            categories.insert(category.id(), category);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.categories.read().map(|c| c.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of a stored category, bypassing the async port
    pub fn find(&self, id: &CategoryId) -> Option<Category> {
        self.categories.read().ok()?.get(id).cloned()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        if categories.contains_key(&category.id()) {
            return Err(DomainError::AlreadyExists(format!(
                "Category '{}'",
                category.id()
            )));
        }
        categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn get(&self, id: &CategoryId) -> Result<Category, DomainError> {
        let categories = self.categories.read().map_err(poisoned)?;
        categories
            .get(id)
            .cloned()
            .ok_or_else(|| category_not_found(id))
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        match categories.get_mut(&category.id()) {
            Some(stored) => {
                *stored = category.clone();
                Ok(())
            }
            None => Err(category_not_found(&category.id())),
        }
    }

    async fn delete(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories
            .remove(&category.id())
            .map(|_| ())
            .ok_or_else(|| category_not_found(&category.id()))
    }

    async fn search(&self, input: &SearchInput) -> Result<SearchOutput<Category>, DomainError> {
        let categories = self.categories.read().map_err(poisoned)?;

        let needle = input
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<Category> = categories
            .values()
            .filter(|c| match &needle {
                Some(needle) => c.name().to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();

        match input.order_by.as_deref() {
            Some("created_at") | Some("createdAt") => {
                matches.sort_by(|a, b| a.created_at().cmp(&b.created_at()))
            }
            // Unknown keys fall back to name
            _ => matches.sort_by(|a, b| {
                a.name()
                    .to_lowercase()
                    .cmp(&b.name().to_lowercase())
                    .then_with(|| a.created_at().cmp(&b.created_at()))
            }),
        }
        if input.order == SearchOrder::Desc {
            matches.reverse();
        }

        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(input.offset())
            .take(input.per_page)
            .collect();

        Ok(SearchOutput {
            current_page: input.page,
            per_page: input.per_page,
            total,
            items,
        })
    }
}

/// Unit of work for the in-memory store
#[derive(Debug, Default)]
pub struct InMemoryUnitOfWork {
    commits: AtomicUsize,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self) -> Result<(), DomainError> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        tracing::trace!("in-memory unit of work committed");
        Ok(())
    }
}
