//! Repository error types
//!
//! This module defines the error taxonomy for data-access operations:
//! caller-facing validation and not-found errors, constraint violations
//! surfaced by the store, and non-recoverable store failures.

use thiserror::Error;

use domain_job::JobError;

/// Errors that can occur during repository operations
///
/// The first two variants are caller-facing and recoverable by fixing the
/// request; the constraint variants surface store-enforced integrity rules;
/// the rest are store failures that are not recoverable at this layer.
/// Nothing is swallowed and nothing is retried here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Request data failed validation before any statement was executed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row matched the given identifier
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation (e.g. unknown company handle)
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Any other executor failure
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::RepositoryError;
    ///
    /// let error = RepositoryError::not_found("job", 999);
    /// assert_eq!(error.to_string(), "No job: 999");
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        RepositoryError::NotFound(format!("No {}: {}", entity, id))
    }

    /// Creates a validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        RepositoryError::Validation(message.into())
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::DuplicateEntry(_)
                | RepositoryError::ForeignKeyViolation(_)
                | RepositoryError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_) | RepositoryError::PoolExhausted
        )
    }
}

impl From<JobError> for RepositoryError {
    fn from(error: JobError) -> Self {
        match error {
            JobError::Validation(message) => RepositoryError::Validation(message),
        }
    }
}

/// Converts SQLx errors to more specific RepositoryError variants
///
/// Analyzes the SQLx error and maps it by PostgreSQL error code, so that
/// integrity violations reach callers as client errors rather than opaque
/// store failures.
impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => RepositoryError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => RepositoryError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => RepositoryError::DuplicateEntry(db_err.message().to_string()),
                        "23503" => {
                            RepositoryError::ForeignKeyViolation(db_err.message().to_string())
                        }
                        "23514" => {
                            RepositoryError::ConstraintViolation(db_err.message().to_string())
                        }
                        _ => RepositoryError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    RepositoryError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => RepositoryError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_format() {
        let error = RepositoryError::not_found("job", 999);
        assert_eq!(error.to_string(), "No job: 999");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_constraint_violation_predicate() {
        assert!(RepositoryError::ForeignKeyViolation("fk".into()).is_constraint_violation());
        assert!(RepositoryError::DuplicateEntry("dup".into()).is_constraint_violation());
        assert!(!RepositoryError::validation("empty").is_constraint_violation());
    }

    #[test]
    fn test_domain_validation_error_maps_to_validation() {
        let error = RepositoryError::from(JobError::validation("salary must be non-negative"));
        assert!(matches!(error, RepositoryError::Validation(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_pool_timeout_maps_to_pool_exhausted() {
        let error = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(error.is_connection_error());
    }
}
