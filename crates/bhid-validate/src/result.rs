//! Validation results and context.

use bhid_model::{Document, Record};
use serde::{Deserialize, Serialize};

use crate::ValidatorKind;
use crate::error::{Result, ValidatorError};

/// Outcome of one rule on one value.
///
/// `message` is set if and only if the value failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    ok: bool,
    kind: ValidatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass(kind: ValidatorKind) -> Self {
        Self {
            ok: true,
            kind,
            message: None,
        }
    }

    /// A failing result with its message.
    pub fn fail(kind: ValidatorKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            kind,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn kind(&self) -> ValidatorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Unwraps the context of a rule that cannot run without one.
pub(crate) fn require_context<'c, 'a>(
    kind: ValidatorKind,
    context: Option<&'c ValidationContext<'a>>,
) -> Result<&'c ValidationContext<'a>> {
    context.ok_or(ValidatorError::MissingContext { kind })
}

/// The row and document a value under test belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub row: &'a Record,
    pub document: &'a Document,
    pub column: &'a str,
}

impl<'a> ValidationContext<'a> {
    pub fn new(row: &'a Record, document: &'a Document, column: &'a str) -> Self {
        Self {
            row,
            document,
            column,
        }
    }
}
