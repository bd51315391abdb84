//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the job listings test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for jobs, patches, and filters
//! - `builders`: Builder patterns for test data construction
//! - `database`: Database test helpers and container management

pub mod builders;
pub mod database;
pub mod fixtures;

pub use builders::*;
pub use database::*;
pub use fixtures::*;
