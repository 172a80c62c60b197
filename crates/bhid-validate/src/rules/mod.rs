//! Rule implementations, one type per `op`.

mod bounds;
mod context;
mod date;
mod field_type;
mod language;
mod regex_match;

pub use bounds::{Bound, LengthBound, ValueBound};
pub use context::{LinkedField, SameValueForAllRows};
pub use date::{DateDiff, DateFieldDiff, Interval};
pub use field_type::{FieldType, FieldTypeLabel};
pub use language::{Language, LanguageCheck};
pub use regex_match::RegexMatch;

use crate::{ValidationResult, ValidatorKind};

/// Failing result using the custom message when one is configured.
pub(crate) fn failure(
    kind: ValidatorKind,
    custom: Option<&str>,
    default: impl FnOnce() -> String,
) -> ValidationResult {
    match custom {
        Some(message) => ValidationResult::fail(kind, message),
        None => ValidationResult::fail(kind, default()),
    }
}

/// Formats a threshold without a trailing `.0` for integral values.
pub(crate) fn format_threshold(value: f64) -> String {
    format!("{value}")
}
