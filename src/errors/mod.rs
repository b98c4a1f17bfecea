// Errors layer - error type definitions

pub mod database;

pub use database::DatabaseError;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error taxonomy for every service and store operation.
///
/// `Validation` and `Conflict` are expected outcomes surfaced as
/// user-facing messages; `Authorization` and `Database` are
/// operationally significant. No variant is ever retried automatically.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// One or more input rules were violated. Carries every violation
    /// found for the input so callers can present them together.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    /// A uniqueness invariant was violated (duplicate username,
    /// category or program name). Produced identically by the
    /// application pre-check and by constraint-violation translation.
    #[error("{0}")]
    Conflict(String),

    /// The acting user is missing the role a privileged call requires.
    #[error("{0}")]
    Authorization(String),

    /// A referenced row no longer exists.
    #[error("{0}")]
    NotFound(String),

    /// Stored credential material could not be decoded or digested.
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },

    /// The underlying store is unreachable or an operation against it
    /// failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    /// Single-rule validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(vec![message.into()])
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict(message.into())
    }

    pub fn database(operation: &str, source: DbErr) -> Self {
        ServiceError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Whether a store error is a unique-constraint violation. The
    /// constraint is the authoritative duplicate guard; pre-checks only
    /// exist for friendlier messages.
    pub fn is_unique_violation(err: &DbErr) -> bool {
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    /// Whether a store error is a foreign-key violation, e.g. a program
    /// insert racing a category delete.
    pub fn is_foreign_key_violation(err: &DbErr) -> bool {
        matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}
