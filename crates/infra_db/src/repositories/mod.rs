//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain entity. Repositories encapsulate query
//! construction and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Every caller-supplied value travels through the bound-argument list
//! - One statement per operation; no application-level transactions
//! - Store errors are mapped into the `RepositoryError` taxonomy, never
//!   swallowed

pub mod job;

pub use job::JobRepository;
