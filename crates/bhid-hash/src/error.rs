//! Error types for reconciliation and hashing.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HashError {
    /// Strict reconciliation found more than one shared column.
    #[error("expected at most one shared column between documents, found {}: {}", columns.len(), columns.join(", "))]
    AmbiguousSharedColumns { columns: Vec<String> },

    /// Salt value is empty.
    #[error("salt must not be empty")]
    EmptySalt,

    /// Concatenation order lists a category twice.
    #[error("hash category '{category}' appears more than once in the concatenation order")]
    DuplicateCategory { category: &'static str },
}

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, HashError>;
