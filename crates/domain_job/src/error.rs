//! Job domain errors
//!
//! This module defines the error types that can occur when constructing or
//! validating job data, before any statement reaches the store.

use thiserror::Error;

/// Errors that can occur in the job domain
#[derive(Debug, Error)]
pub enum JobError {
    /// Invalid job data provided
    #[error("Validation error: {0}")]
    Validation(String),
}

impl JobError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        JobError::Validation(message.into())
    }
}
