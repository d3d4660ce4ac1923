//! Error types for cat fact storage.

use catfacts_core::FactError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connecting to the database or running a query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database returned a value that cannot be represented.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The connection settings are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<StoreError> for FactError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
