//! Contract error types for outcomes service
//!
//! These errors are transport-agnostic; the REST layer maps them to status codes.

use thiserror::Error;

/// Outcomes service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomesError {
    /// A required field is missing or empty
    #[error("{message}")]
    Validation {
        /// Field-level message returned to the caller
        message: String,
    },
    /// Referenced entity does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (submission, user, ...)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Unknown email or wrong password. Deliberately says nothing about which.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Underlying query failed; carries the raw storage message
    #[error("{message}")]
    Storage {
        /// Storage error message
        message: String,
    },
}

impl OutcomesError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Wrap a repository failure, keeping the underlying message
    pub fn storage(error: anyhow::Error) -> Self {
        tracing::error!("Storage error: {:#}", error);
        Self::Storage {
            message: error.to_string(),
        }
    }
}
