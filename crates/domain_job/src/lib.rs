//! Job Listings Domain
//!
//! This crate defines the domain model for job listings: the [`Job`] record,
//! the data required to create one, the partial-update payload, and the
//! optional search filters used when listing jobs.
//!
//! # Key Concepts
//!
//! - **Job**: A posting at a company, identified by a store-generated id
//! - **Partial update**: A request that supplies only a subset of a job's
//!   mutable fields (`title`, `salary`, `equity`), leaving the rest unchanged
//! - **Filter**: Optional search criteria (title substring, minimum salary,
//!   equity flag) that compose into a listing query
//!
//! # Invariants
//!
//! - `salary` is non-negative when present
//! - `equity` lies in `[0, 1]` when present
//! - A job's `id` and `company_handle` are immutable after creation; only the
//!   fields declared on [`JobPatch`] can change
//!
//! The crate is persistence-agnostic: it knows nothing about SQL or pools.
//! The `infra_db` crate consumes these types when building queries.

pub mod error;
pub mod filter;
pub mod job;

pub use error::JobError;
pub use filter::JobFilter;
pub use job::{DeletedJob, FieldValue, Job, JobPatch, NewJob};
