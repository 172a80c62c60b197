//! Declarative validator options.

use serde::{Deserialize, Serialize};
use serde_json::Value as OptionValue;

use crate::error::{Result, ValidatorError};
use crate::ValidatorKind;

/// Options for one rule, tagged by `op`.
///
/// `value` is kept loosely typed so that a wrong parameter type is reported by
/// the rule's constructor rather than silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorOptions {
    pub op: ValidatorKind,
    /// Main parameter: pattern, type label, threshold, or language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    /// Sibling field for `linked_field` and `date_field_diff`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// strftime format for date rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Fixed reference date for `date_diff`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Lower interval bound for date rules (e.g. `18y`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Upper interval bound for date rules (e.g. `120y`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    /// Custom failure message replacing the rule's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidatorOptions {
    /// Options with only the `op` tag set.
    pub fn new(op: ValidatorKind) -> Self {
        Self {
            op,
            value: None,
            target: None,
            format: None,
            reference: None,
            min: None,
            max: None,
            message: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// `value` as a string; missing or non-string values are errors.
    pub(crate) fn value_str(&self) -> Result<&str> {
        match &self.value {
            None => Err(self.missing("value")),
            Some(OptionValue::String(text)) => Ok(text),
            Some(other) => Err(self.invalid("value", format!("expected a string, got {other}"))),
        }
    }

    /// `value` as a number; missing or non-numeric values are errors.
    pub(crate) fn value_number(&self) -> Result<f64> {
        match &self.value {
            None => Err(self.missing("value")),
            Some(OptionValue::Number(number)) => number
                .as_f64()
                .ok_or_else(|| self.invalid("value", format!("{number} is not representable"))),
            Some(other) => Err(self.invalid("value", format!("expected a number, got {other}"))),
        }
    }

    /// `target` as a non-empty field name.
    pub(crate) fn target_field(&self) -> Result<&str> {
        match self.target.as_deref().map(str::trim) {
            None => Err(self.missing("target")),
            Some("") => Err(self.invalid("target", "must name a field".to_string())),
            Some(target) => Ok(target),
        }
    }

    pub(crate) fn missing(&self, option: &'static str) -> ValidatorError {
        ValidatorError::MissingOption {
            kind: self.op,
            option,
        }
    }

    pub(crate) fn invalid(&self, option: &'static str, reason: String) -> ValidatorError {
        ValidatorError::InvalidOption {
            kind: self.op,
            option,
            reason,
        }
    }
}
