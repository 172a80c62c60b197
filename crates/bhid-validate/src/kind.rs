//! Validator kind discriminator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `op` tag identifying a rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    RegexMatch,
    FieldType,
    LinkedField,
    LanguageCheck,
    MinFieldLength,
    MaxFieldLength,
    MinValue,
    MaxValue,
    SameValueForAllRows,
    DateDiff,
    DateFieldDiff,
}

impl ValidatorKind {
    /// Get all validator kinds.
    pub const fn all() -> &'static [Self] {
        &[
            Self::RegexMatch,
            Self::FieldType,
            Self::LinkedField,
            Self::LanguageCheck,
            Self::MinFieldLength,
            Self::MaxFieldLength,
            Self::MinValue,
            Self::MaxValue,
            Self::SameValueForAllRows,
            Self::DateDiff,
            Self::DateFieldDiff,
        ]
    }

    /// Parse a kind from its `op` tag.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == s.trim())
    }

    /// The `op` tag as written in configuration.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::RegexMatch => "regex_match",
            Self::FieldType => "field_type",
            Self::LinkedField => "linked_field",
            Self::LanguageCheck => "language_check",
            Self::MinFieldLength => "min_field_length",
            Self::MaxFieldLength => "max_field_length",
            Self::MinValue => "min_value",
            Self::MaxValue => "max_value",
            Self::SameValueForAllRows => "same_value_for_all_rows",
            Self::DateDiff => "date_diff",
            Self::DateFieldDiff => "date_field_diff",
        }
    }

    /// True for rules that must be called with a validation context.
    pub fn requires_context(&self) -> bool {
        matches!(
            self,
            Self::LinkedField | Self::SameValueForAllRows | Self::DateFieldDiff
        )
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
