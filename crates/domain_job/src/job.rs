//! Job entity and update payload
//!
//! This module defines the [`Job`] record as persisted in the store, the
//! [`NewJob`] data required to create one, and the [`JobPatch`] payload for
//! partial updates.
//!
//! # Mutable Fields
//!
//! Only `title`, `salary`, and `equity` can change after creation. [`JobPatch`]
//! declares exactly those fields, so an update payload cannot carry unknown
//! keys by construction; [`JobPatch::entries`] is the single enumeration of
//! mutable fields that the query-construction layer iterates.
//!
//! # Examples
//!
//! ```rust
//! use domain_job::{JobPatch, NewJob};
//! use rust_decimal::Decimal;
//!
//! let job = NewJob::new("Software Engineer", "acme")
//!     .with_salary(120_000)
//!     .with_equity(Decimal::ZERO);
//! assert!(job.validate().is_ok());
//!
//! let patch = JobPatch::default().with_salary(95_000);
//! assert!(!patch.is_empty());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::JobError;

/// A job posting as stored, including its generated identity.
///
/// `id` and `company_handle` are immutable after creation. The company handle
/// references a Company entity managed elsewhere; referential integrity is
/// enforced by the store, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Store-generated primary key
    pub id: i64,
    pub title: String,
    /// Annual salary; non-negative when present
    pub salary: Option<i64>,
    /// Equity share in `[0, 1]` when present
    pub equity: Option<Decimal>,
    /// Handle of the company this posting belongs to
    pub company_handle: String,
}

/// Data for creating a new job posting.
///
/// Carries every column except the generated id. Validate with
/// [`NewJob::validate`] before handing it to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl NewJob {
    /// Creates a new job with the required fields and no salary or equity
    pub fn new(title: impl Into<String>, company_handle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            salary: None,
            equity: None,
            company_handle: company_handle.into(),
        }
    }

    /// Sets the salary
    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Sets the equity share
    pub fn with_equity(mut self, equity: Decimal) -> Self {
        self.equity = Some(equity);
        self
    }

    /// Checks the domain invariants: salary non-negative, equity in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns `JobError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), JobError> {
        validate_salary(self.salary)?;
        validate_equity(self.equity)
    }
}

/// A partial-update payload for a job.
///
/// Every field is optional; absent fields are left unchanged by the update.
/// The payload must contain at least one field when used — the
/// query-construction layer rejects an empty patch before any statement
/// is executed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i64>,
    pub equity: Option<Decimal>,
}

impl JobPatch {
    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the salary
    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Sets the equity share
    pub fn with_equity(mut self, equity: Decimal) -> Self {
        self.equity = Some(equity);
        self
    }

    /// Returns true when no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }

    /// Checks the domain invariants on the fields that are present
    ///
    /// An empty patch passes here; emptiness is rejected separately when the
    /// SET clause is built.
    pub fn validate(&self) -> Result<(), JobError> {
        validate_salary(self.salary)?;
        validate_equity(self.equity)
    }

    /// Enumerates the present fields in declared order: title, salary, equity.
    ///
    /// The returned pairs carry the semantic field name and the value to bind.
    /// This is the only path from a patch into query construction, so field
    /// names that are not declared here can never reach the column resolver.
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut entries = Vec::new();
        if let Some(title) = &self.title {
            entries.push(("title", FieldValue::Text(title.clone())));
        }
        if let Some(salary) = self.salary {
            entries.push(("salary", FieldValue::Int(salary)));
        }
        if let Some(equity) = self.equity {
            entries.push(("equity", FieldValue::Decimal(equity)));
        }
        entries
    }
}

/// A typed value destined for a query's bound-argument list.
///
/// Caller-supplied data travels as one of these variants and is always bound
/// positionally, never interpolated into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Decimal(Decimal),
}

/// Minimal identifying data returned after a job is deleted,
/// for caller-side reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedJob {
    pub title: String,
    pub company_handle: String,
}

fn validate_salary(salary: Option<i64>) -> Result<(), JobError> {
    match salary {
        Some(s) if s < 0 => Err(JobError::validation(format!(
            "salary must be non-negative, got {s}"
        ))),
        _ => Ok(()),
    }
}

fn validate_equity(equity: Option<Decimal>) -> Result<(), JobError> {
    match equity {
        Some(e) if e < Decimal::ZERO || e > Decimal::ONE => Err(JobError::validation(format!(
            "equity must be between 0 and 1, got {e}"
        ))),
        _ => Ok(()),
    }
}
