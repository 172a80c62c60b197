//! `field_type`: the runtime type of a value must match a configured label.

use bhid_model::Value;

use super::failure;
use crate::error::{Result, ValidatorError};
use crate::registry::Validator;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

const KIND: ValidatorKind = ValidatorKind::FieldType;

/// Recognized type labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTypeLabel {
    Text,
    Number,
}

impl FieldTypeLabel {
    /// Parse a label case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Text, Value::Text(_)) | (Self::Number, Value::Number(_))
        )
    }
}

#[derive(Debug, Clone)]
pub struct FieldType {
    expected: FieldTypeLabel,
    message: Option<String>,
}

impl FieldType {
    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        let label = options.value_str()?;
        let expected = FieldTypeLabel::parse(label).ok_or_else(|| ValidatorError::UnsupportedType {
            label: label.to_string(),
        })?;
        Ok(Self {
            expected,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for FieldType {
    fn kind(&self) -> ValidatorKind {
        KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        if value.is_some_and(|v| self.expected.matches(v)) {
            return Ok(ValidationResult::pass(KIND));
        }
        Ok(failure(KIND, self.message.as_deref(), || {
            format!("must be of type: {}", self.expected.label())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(label: &str) -> FieldType {
        FieldType::new(&ValidatorOptions::new(KIND).with_value(label)).unwrap()
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert!(rule("TEXT").validate(Some(&Value::from("a")), None).unwrap().is_ok());
        assert!(rule("Number").validate(Some(&Value::Number(1.0)), None).unwrap().is_ok());
    }

    #[test]
    fn test_type_mismatch_fails() {
        let result = rule("number").validate(Some(&Value::from("12")), None).unwrap();
        assert!(!result.is_ok());
        assert_eq!(result.message(), Some("must be of type: number"));

        let result = rule("text").validate(Some(&Value::Number(12.0)), None).unwrap();
        assert_eq!(result.message(), Some("must be of type: text"));
    }

    #[test]
    fn test_absent_value_fails() {
        assert!(!rule("text").validate(None, None).unwrap().is_ok());
    }

    #[test]
    fn test_unknown_label_fails_construction() {
        let result = FieldType::new(&ValidatorOptions::new(KIND).with_value("date"));
        assert!(matches!(result, Err(ValidatorError::UnsupportedType { .. })));
    }
}
