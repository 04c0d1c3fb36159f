//! Error types for dbdraft

use thiserror::Error;

/// Core error type for dbdraft operations
#[derive(Error, Debug)]
pub enum DbDraftError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dbdraft operations
pub type Result<T> = std::result::Result<T, DbDraftError>;
