//! Core error types for the InvestiZen application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by the storage layer.
//!
//! The analytics functions in [`crate::portfolio`] are total over validated
//! input and never return these errors; only the holdings boundary, the
//! configuration checks, and storage do.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository operation failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

/// Storage-agnostic error type for repository operations.
///
/// Repository implementations convert their own failures into this format.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record with the same key already exists.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unknown holding category '{0}'")]
    UnknownCategory(String),
}
