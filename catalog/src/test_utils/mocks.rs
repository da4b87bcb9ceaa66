//! Mock implementations of port traits
//!
//! Doubles for the failure paths and for verifying which port calls a use
//! case made. Happy paths use the in-memory adapter directly.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;

use crate::adapters::memory::InMemoryCategoryRepository;
use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::{CategoryRepository, Clock, UnitOfWork};
use crate::domain::search::{SearchInput, SearchOutput};
use crate::error::DomainError;

// ============================================================================
// Failing ports
// ============================================================================

/// Every call fails with a database error
pub struct FailingCategoryRepository;

fn unavailable() -> DomainError {
    DomainError::Database("store unavailable".to_string())
}

#[async_trait]
impl CategoryRepository for FailingCategoryRepository {
    async fn insert(&self, _category: &Category) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn get(&self, _id: &CategoryId) -> Result<Category, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _category: &Category) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _category: &Category) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn search(&self, _input: &SearchInput) -> Result<SearchOutput<Category>, DomainError> {
        Err(unavailable())
    }
}

pub struct FailingUnitOfWork;

#[async_trait]
impl UnitOfWork for FailingUnitOfWork {
    async fn commit(&self) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

// ============================================================================
// Spy repository
// ============================================================================

/// Delegates to an in-memory store and records the port methods called
pub struct SpyCategoryRepository {
    inner: InMemoryCategoryRepository,
    calls: Mutex<Vec<&'static str>>,
}

impl SpyCategoryRepository {
    pub fn new(inner: InMemoryCategoryRepository) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CategoryRepository for SpyCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), DomainError> {
        self.record("insert");
        self.inner.insert(category).await
    }

    async fn get(&self, id: &CategoryId) -> Result<Category, DomainError> {
        self.record("get");
        self.inner.get(id).await
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        self.record("update");
        self.inner.update(category).await
    }

    async fn delete(&self, category: &Category) -> Result<(), DomainError> {
        self.record("delete");
        self.inner.delete(category).await
    }

    async fn search(&self, input: &SearchInput) -> Result<SearchOutput<Category>, DomainError> {
        self.record("search");
        self.inner.search(input).await
    }
}

// ============================================================================
// Fixed clock
// ============================================================================

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
