//! Rules that read beyond the value under test: `linked_field` and
//! `same_value_for_all_rows`.

use bhid_model::Value;

use super::failure;
use crate::error::Result;
use crate::registry::Validator;
use crate::result::require_context;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

fn is_empty(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_blank)
}

/// A non-empty value requires its sibling `target` field to be non-empty too.
#[derive(Debug, Clone)]
pub struct LinkedField {
    target: String,
    message: Option<String>,
}

impl LinkedField {
    const KIND: ValidatorKind = ValidatorKind::LinkedField;

    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        Ok(Self {
            target: options.target_field()?.to_string(),
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for LinkedField {
    fn kind(&self) -> ValidatorKind {
        Self::KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let context = require_context(Self::KIND, context)?;
        if is_empty(value) || !is_empty(context.row.get(&self.target)) {
            return Ok(ValidationResult::pass(Self::KIND));
        }
        Ok(failure(Self::KIND, self.message.as_deref(), || {
            format!("is linked with field '{}' which cannot be empty", self.target)
        }))
    }
}

/// Every row must carry the same value as the document's first row.
#[derive(Debug, Clone)]
pub struct SameValueForAllRows {
    message: Option<String>,
}

impl SameValueForAllRows {
    const KIND: ValidatorKind = ValidatorKind::SameValueForAllRows;

    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        Ok(Self {
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for SameValueForAllRows {
    fn kind(&self) -> ValidatorKind {
        Self::KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let context = require_context(Self::KIND, context)?;
        let Some(first) = context.document.first() else {
            return Ok(ValidationResult::pass(Self::KIND));
        };
        if first.get(context.column) == value {
            return Ok(ValidationResult::pass(Self::KIND));
        }
        Ok(failure(Self::KIND, self.message.as_deref(), || {
            "must have identical values in the column".to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use bhid_model::{Document, Record};

    use super::*;
    use crate::error::ValidatorError;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (*k, Value::from(*v)))
            .collect()
    }

    fn linked() -> LinkedField {
        LinkedField::new(
            &ValidatorOptions::new(ValidatorKind::LinkedField).with_target("father_last_name"),
        )
        .unwrap()
    }

    #[test]
    fn test_linked_field_empty_own_value_always_passes() {
        let rule = linked();
        let document = Document::new("doc", vec![]);
        for row in [
            record(&[]),
            record(&[("father_last_name", "")]),
            record(&[("father_last_name", "Haddad")]),
        ] {
            let context = ValidationContext::new(&row, &document, "father_first_name");
            assert!(rule.validate(None, Some(&context)).unwrap().is_ok());
            let blank = Value::from("  ");
            assert!(rule.validate(Some(&blank), Some(&context)).unwrap().is_ok());
        }
    }

    #[test]
    fn test_linked_field_requires_non_empty_target() {
        let rule = linked();
        let document = Document::new("doc", vec![]);
        let value = Value::from("Karim");

        let row = record(&[("father_last_name", "Haddad")]);
        let context = ValidationContext::new(&row, &document, "father_first_name");
        assert!(rule.validate(Some(&value), Some(&context)).unwrap().is_ok());

        for row in [record(&[]), record(&[("father_last_name", " ")])] {
            let context = ValidationContext::new(&row, &document, "father_first_name");
            let result = rule.validate(Some(&value), Some(&context)).unwrap();
            assert_eq!(
                result.message(),
                Some("is linked with field 'father_last_name' which cannot be empty")
            );
        }
    }

    #[test]
    fn test_linked_field_without_context_is_an_error() {
        let rule = linked();
        for value in [None, Some(Value::from("")), Some(Value::from("x"))] {
            assert!(matches!(
                rule.validate(value.as_ref(), None),
                Err(ValidatorError::MissingContext {
                    kind: ValidatorKind::LinkedField
                })
            ));
        }
    }

    #[test]
    fn test_linked_field_requires_target_option() {
        let result = LinkedField::new(&ValidatorOptions::new(ValidatorKind::LinkedField));
        assert!(matches!(result, Err(ValidatorError::MissingOption { option: "target", .. })));
    }

    #[test]
    fn test_same_value_for_all_rows() {
        let rule =
            SameValueForAllRows::new(&ValidatorOptions::new(ValidatorKind::SameValueForAllRows))
                .unwrap();
        let rows = vec![
            record(&[("governorate", "Baghdad")]),
            record(&[("governorate", "Baghdad")]),
            record(&[("governorate", "Basra")]),
            record(&[]),
        ];
        let document = Document::new("doc", rows);
        let outcomes: Vec<bool> = document
            .data
            .iter()
            .map(|row| {
                let context = ValidationContext::new(row, &document, "governorate");
                rule.validate(row.get("governorate"), Some(&context))
                    .unwrap()
                    .is_ok()
            })
            .collect();
        assert_eq!(outcomes, vec![true, true, false, false]);
    }

    #[test]
    fn test_same_value_without_context_is_an_error() {
        let rule =
            SameValueForAllRows::new(&ValidatorOptions::new(ValidatorKind::SameValueForAllRows))
                .unwrap();
        assert!(rule.validate(Some(&Value::from("a")), None).is_err());
    }
}
