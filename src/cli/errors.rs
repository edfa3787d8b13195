//! CLI-specific error types

use thiserror::Error;

use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Store configuration or connection failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Server bind or serve failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_passes_through() {
        let err = CliError::from(StoreError::config("DB_PORT is not set"));
        assert_eq!(err.to_string(), "configuration error: DB_PORT is not set");
    }
}
