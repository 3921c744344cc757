//! Domain errors
//!
//! Adapters report failures through these types so that nothing
//! storage- or transport-specific crosses into the application layer.

use thiserror::Error;

/// Business-rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {min} characters long (got {actual})")]
    NameTooShort { min: usize, actual: usize },

    #[error("unknown role '{0}' (expected admin or user)")]
    UnknownRole(String),
}

/// Repository errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("no person stored under ID '{0}'")]
    NotFound(String),

    #[error("store failure: {0}")]
    Persistence(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

/// Outbound message errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("could not deliver message to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}
