//! Error types for cat fact operations.

use crate::ids::FactId;

/// Result type for cat fact operations.
pub type Result<T> = std::result::Result<T, FactError>;

/// Errors that can occur while creating, reading, updating or deleting facts.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// Required input was missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// No fact exists with the given identifier.
    #[error("Hecho con ID {0} no encontrado")]
    NotFound(FactId),

    /// The fact source was unreachable or answered with a non-success status.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The fact source answered, but without the expected `fact` field.
    #[error("malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// The translation call failed.
    #[error("translation error: {0}")]
    Translation(String),

    /// The store could not be reached or a query failed.
    #[error("storage error: {0}")]
    Store(String),
}
