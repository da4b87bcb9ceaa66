//! Catalog administration core
//!
//! A `Category` aggregate with its use cases, laid out as ports and adapters:
//! the domain owns the invariants and port traits, the application layer
//! orchestrates use cases, adapters implement the ports.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use config::Config;
pub use error::{AppError, DomainError, EntityValidationError};
