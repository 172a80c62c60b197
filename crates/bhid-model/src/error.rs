//! Error types for model construction.

use thiserror::Error;

/// Errors raised while building model types from configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Two columns in one schema resolve to the same alias.
    #[error("duplicate alias '{alias}' in schema '{schema}'")]
    DuplicateAlias { schema: String, alias: String },

    /// A column definition has an empty alias.
    #[error("column '{name}' in schema '{schema}' has an empty alias")]
    EmptyAlias { schema: String, name: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::DuplicateAlias {
            schema: "registrations".to_string(),
            alias: "first_name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate alias 'first_name' in schema 'registrations'"
        );
    }
}
