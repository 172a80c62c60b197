//! Error types for validator construction and invocation.
//!
//! These are configuration or usage errors. A value failing a rule is never an
//! error; it is an `Ok(ValidationResult)` with `ok == false`.

use thiserror::Error;

use crate::ValidatorKind;

/// Fatal validator errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// A required option is missing.
    #[error("{kind}: missing required option '{option}'")]
    MissingOption {
        kind: ValidatorKind,
        option: &'static str,
    },

    /// An option has the wrong type or an unusable value.
    #[error("{kind}: invalid option '{option}': {reason}")]
    InvalidOption {
        kind: ValidatorKind,
        option: &'static str,
        reason: String,
    },

    /// The `value` option of `regex_match` does not compile.
    #[error("regex_match: invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// `field_type` names an unknown type label.
    #[error("field_type: unsupported type '{label}' (expected text or number)")]
    UnsupportedType { label: String },

    /// `language_check` names an unsupported language.
    #[error("language_check: unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    /// A rule that needs row/document context was invoked without it.
    #[error("{kind}: validation context (row and document) is required")]
    MissingContext { kind: ValidatorKind },

    /// No constructor is registered for the kind.
    #[error("no validator registered for '{kind}'")]
    Unregistered { kind: ValidatorKind },
}

/// Result type for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidatorError::MissingContext {
            kind: ValidatorKind::LinkedField,
        };
        assert_eq!(
            err.to_string(),
            "linked_field: validation context (row and document) is required"
        );

        let err = ValidatorError::MissingOption {
            kind: ValidatorKind::MinValue,
            option: "value",
        };
        assert_eq!(err.to_string(), "min_value: missing required option 'value'");
    }
}
