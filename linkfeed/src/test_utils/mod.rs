//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mock provider is hand-written rather than generated: it only needs to
//! replay canned documents and record which URLs were fetched.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
