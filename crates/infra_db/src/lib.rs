//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the job listings
//! system on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: callers hand over domain types
//! from `domain_job` and get domain records back, never SQL. Query
//! construction lives in the [`sql`] module and upholds one contract
//! everywhere: caller-supplied data travels exclusively through the bound
//! argument list, with placeholders numbered contiguously from `$1` in the
//! same order as the values.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, JobRepository};
//! use domain_job::NewJob;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/jobs")).await?;
//! let repo = JobRepository::new(pool);
//! let job = repo.create(NewJob::new("Software Engineer", "acme")).await?;
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod sql;

pub use error::RepositoryError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::JobRepository;
