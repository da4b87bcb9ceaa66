//! Unified error types for the catalog
//!
//! This module defines error types for each layer:
//! - `EntityValidationError`: an aggregate invariant was violated
//! - `DomainError`: Core business logic and port errors
//! - `AppError`: Application layer errors (wraps domain errors for callers)

use thiserror::Error;

/// Raised when an entity rejects a value. The message is shown verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct EntityValidationError(pub String);

impl EntityValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    /// Carries the full, caller-facing message (e.g. `Category '<id>' not found`)
    #[error("{0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - returned by use cases
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<EntityValidationError> for AppError {
    fn from(e: EntityValidationError) -> Self {
        AppError::Domain(DomainError::Validation(e))
    }
}

impl AppError {
    /// True when the error was raised by an aggregate invariant
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Validation(_)))
    }

    /// True when a lookup missed
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::NotFound(_)))
    }
}
