//! Store error types

use std::fmt;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a [`WorldStore`](super::WorldStore) implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No row matched the filter
    #[error("no such {entity} Name = {key}")]
    NotFound { entity: &'static str, key: String },

    /// Query or connection failure in the backing store
    #[error("backing store error: {0}")]
    Backend(String),

    /// Invalid or missing connection configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn backend(err: impl fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the error means "no matching row" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_key() {
        let err = StoreError::not_found("city", "Atlantis");
        assert_eq!(err.to_string(), "no such city Name = Atlantis");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_backend_is_not_not_found() {
        let err = StoreError::backend("connection reset");
        assert!(!err.is_not_found());
    }
}
