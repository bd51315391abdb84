//! Job repository implementation
//!
//! This module provides database access for job listings: create, get,
//! filtered listing, partial update, and delete against the `jobs` table.
//!
//! # Query Construction
//!
//! The listing and update paths build their SQL dynamically through the
//! builders in [`crate::sql`]; everything else is a fixed statement. In both
//! cases caller-supplied data — including the row id in UPDATE and DELETE —
//! is bound positionally, never interpolated into the SQL text.
//!
//! # Persisted Shape
//!
//! One row per job: `id` (generated primary key), `title`, `salary`,
//! `equity`, `company_handle` (foreign key to a company managed elsewhere).

use sqlx::PgPool;
use tracing::debug;

use domain_job::{DeletedJob, Job, JobFilter, JobPatch, NewJob};

use crate::error::RepositoryError;
use crate::sql::{bind_values, build_set_clause, build_where_clause, JOB_FIELD_MAP};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Repository for managing job listings
///
/// Holds the externally-owned connection pool; operations are independent
/// single statements, so instances are cheap to clone and safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Creates a new JobRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a job posting and returns it with its generated id
    ///
    /// # Errors
    ///
    /// - `Validation` if the data violates the salary or equity invariants
    /// - `ForeignKeyViolation` if `company_handle` does not reference an
    ///   existing company (enforced by the store)
    pub async fn create(&self, data: NewJob) -> Result<Job, RepositoryError> {
        data.validate()?;

        let row = sqlx::query_as::<_, JobRow>(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, title, salary, equity, company_handle",
        )
        .bind(&data.title)
        .bind(data.salary)
        .bind(data.equity)
        .bind(&data.company_handle)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Retrieves a job by its id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no job has the given id.
    pub async fn get(&self, id: i64) -> Result<Job, RepositoryError> {
        let row = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, salary, equity, company_handle FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("job", id))?;

        Ok(row.into())
    }

    /// Lists jobs matching the given filter, ordered by id
    ///
    /// An empty filter returns every job. Ordering by id keeps results
    /// stable and deterministic for a given store state.
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let (sql, values) = compose_list_query(filter);
        debug!(predicates = values.len(), "listing jobs");

        let rows = bind_values(sqlx::query_as::<_, JobRow>(&sql), &values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    /// Lists all jobs at one company, ordered by id
    pub async fn find_by_company(&self, company_handle: &str) -> Result<Vec<Job>, RepositoryError> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE company_handle = $1 ORDER BY id",
        )
        .bind(company_handle)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    /// Applies a partial update to the job with the given id and returns the
    /// updated record
    ///
    /// Only the fields present on the patch change; the rest keep their
    /// stored values.
    ///
    /// # Errors
    ///
    /// - `Validation` if the patch is empty (rejected before any statement
    ///   executes) or violates the salary/equity invariants
    /// - `NotFound` when no row matched the id
    pub async fn update_partial(&self, id: i64, patch: &JobPatch) -> Result<Job, RepositoryError> {
        patch.validate()?;
        let (sql, values) = compose_update_query(patch)?;
        debug!(fields = values.len(), "updating job");

        let row = bind_values(sqlx::query_as::<_, JobRow>(&sql), &values)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("job", id))?;

        Ok(row.into())
    }

    /// Deletes the job with the given id, returning minimal identifying data
    /// for caller-side reporting
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no row matched the id.
    pub async fn delete(&self, id: i64) -> Result<DeletedJob, RepositoryError> {
        let row = sqlx::query_as::<_, DeletedRow>(
            "DELETE FROM jobs WHERE id = $1 RETURNING title, company_handle",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("job", id))?;

        Ok(DeletedJob {
            title: row.title,
            company_handle: row.company_handle,
        })
    }
}

/// Composes the listing statement: filter predicates numbered from `$1`,
/// then a deterministic ORDER BY.
fn compose_list_query(filter: &JobFilter) -> (String, Vec<domain_job::FieldValue>) {
    let clause = build_where_clause(filter, 1);

    let mut sql = format!("SELECT {JOB_COLUMNS} FROM jobs");
    if !clause.is_empty() {
        sql.push(' ');
        sql.push_str(&clause.sql);
    }
    sql.push_str(" ORDER BY id");

    (sql, clause.values)
}

/// Composes the update statement: SET placeholders numbered from `$1`, with
/// the row id bound as the next placeholder after them.
fn compose_update_query(
    patch: &JobPatch,
) -> Result<(String, Vec<domain_job::FieldValue>), RepositoryError> {
    let set = build_set_clause(patch.entries(), &JOB_FIELD_MAP)?;
    let id_placeholder = set.values.len() + 1;

    let sql = format!(
        "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
        set.clause, id_placeholder, JOB_COLUMNS
    );

    Ok((sql, set.values))
}

/// Database row representation of a job
#[derive(Debug, Clone, sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<rust_decimal::Decimal>,
    company_handle: String,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            title: row.title,
            salary: row.salary,
            equity: row.equity,
            company_handle: row.company_handle,
        }
    }
}

/// Row returned by the DELETE statement
#[derive(Debug, Clone, sqlx::FromRow)]
struct DeletedRow {
    title: String,
    company_handle: String,
}
