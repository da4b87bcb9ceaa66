//! Category domain entity
//!
//! The catalog's aggregate root. A `Category` validates its own invariants
//! on construction and on every update, so an instance held by the
//! application layer is always valid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation;
use crate::error::EntityValidationError;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A catalog category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category stamped with the current time
    pub fn new(
        name: &str,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        Self::with_created_at(name, description, is_active, Utc::now())
    }

    /// Create a new category with an externally supplied creation time
    pub fn with_created_at(
        name: &str,
        description: Option<&str>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EntityValidationError> {
        Self::restore(CategoryId::new(), name, description, is_active, created_at)
    }

    /// Rebuild a stored category. Invariants are still enforced.
    pub fn restore(
        id: CategoryId,
        name: &str,
        description: Option<&str>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EntityValidationError> {
        validate_name(name)?;
        validation::not_null(description, "Description")?;
        let description = description.unwrap_or_default();
        validate_description(description)?;

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            is_active,
            created_at,
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Change the name and, when given, the description.
    ///
    /// Every supplied field is validated before any is written, so a
    /// rejected update leaves the category exactly as it was.
    pub fn update(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), EntityValidationError> {
        validate_name(name)?;
        if let Some(description) = description {
            validate_description(description)?;
        }

        self.name = name.to_string();
        if let Some(description) = description {
            self.description = description.to_string();
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), EntityValidationError> {
    validation::not_null_or_empty(Some(name), "Name")?;
    validation::min_length(name, NAME_MIN_LENGTH, "Name")?;
    validation::max_length(name, NAME_MAX_LENGTH, "Name")
}

fn validate_description(description: &str) -> Result<(), EntityValidationError> {
    validation::max_length(description, DESCRIPTION_MAX_LENGTH, "Description")
}
