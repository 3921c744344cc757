//! Application layer errors

use thiserror::Error;

use crate::domain::errors::{RepositoryError, SendError, ValidationError};

/// Use-case errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Person with ID '{0}' not found.")]
    PersonNotFound(String),

    #[error("Failed to {action}: {source}")]
    Persistence {
        action: &'static str,
        source: RepositoryError,
    },

    #[error("Delivery error: {0}")]
    Delivery(#[from] SendError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::PersonNotFound(_))
    }

    /// Re-signal a repository lookup failure for the person `id`
    pub(crate) fn from_lookup(id: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => ServiceError::PersonNotFound(id.to_string()),
            source => ServiceError::Persistence {
                action: "load person",
                source,
            },
        }
    }

    pub(crate) fn from_save(err: RepositoryError) -> Self {
        ServiceError::Persistence {
            action: "save person",
            source: err,
        }
    }
}

/// Reject empty or whitespace-only input before any repository call
pub(crate) fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_not_found_becomes_person_not_found() {
        let err = ServiceError::from_lookup("42", RepositoryError::NotFound("42".to_string()));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Person with ID '42' not found.");
    }

    #[test]
    fn lookup_store_failure_keeps_source() {
        let err = ServiceError::from_lookup("42", RepositoryError::Persistence("disk full".to_string()));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Failed to load person: store failure: disk full");
    }

    #[test]
    fn validation_error_is_wrapped_with_prefix() {
        let err = ServiceError::from(ValidationError::NameTooShort { min: 3, actual: 2 });
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: name must be at least 3 characters long (got 2)"
        );
    }

    #[test]
    fn require_rejects_blank() {
        assert!(require("name", "Alice").is_ok());
        assert!(matches!(require("name", "   "), Err(ServiceError::InvalidInput(_))));
    }
}
