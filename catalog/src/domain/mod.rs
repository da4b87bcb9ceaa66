//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `search`: Paging criteria shared by repository ports
//! - `validation`: Field checks used by entities to enforce invariants

pub mod entities;
pub mod ports;
pub mod search;
pub mod validation;
