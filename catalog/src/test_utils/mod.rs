//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Fixtures are plain builder functions; mocks cover failing ports, call
//! recording and a fixed clock.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
