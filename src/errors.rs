//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants map
//! one-to-one onto the HTTP responses produced by the API layer: `NotFound`
//! becomes a 404, `Validation` a 400, and everything else a 500.

use thiserror::Error;

/// Crate-wide error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced entity (user, account, category, transaction, budget)
    /// does not exist. `entity` is the human-readable name used in the
    /// client-facing message.
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable entity name, e.g. "User"
        entity: &'static str,
        /// The id that failed the lookup
        id: i64,
    },

    /// Malformed input rejected before any store access.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Underlying relational operation failed. Never retried automatically.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration error (missing or inconsistent settings).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other unexpected failure.
    #[error("Internal server error: {message}")]
    Internal {
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Shorthand for the existence-check failure used by every repository.
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for input validation failures.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
