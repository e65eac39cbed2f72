//! Domain errors

use std::fmt;

/// Domain-level error types
#[derive(Debug, Clone)]
pub enum DomainError {
    /// Storage/database error
    StorageError(String),
    /// A stored record could not be mapped to a domain value
    CorruptRecord(String),
    /// Generic error
    Other(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageError(msg) => write!(f, "Storage error: {}", msg),
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
