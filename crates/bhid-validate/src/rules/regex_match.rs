//! `regex_match`: the whole value must match a pattern.

use bhid_model::Value;
use regex::Regex;

use super::failure;
use crate::error::{Result, ValidatorError};
use crate::registry::Validator;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

const KIND: ValidatorKind = ValidatorKind::RegexMatch;

#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: String,
    regex: Regex,
    message: Option<String>,
}

impl RegexMatch {
    /// Compiles `value` anchored at both ends.
    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        let pattern = options.value_str()?.to_string();
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            ValidatorError::InvalidRegex {
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            pattern,
            regex,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for RegexMatch {
    fn kind(&self) -> ValidatorKind {
        KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let Some(value) = value else {
            return Ok(failure(KIND, self.message.as_deref(), || {
                "must not be empty".to_string()
            }));
        };
        if self.regex.is_match(&value.to_string()) {
            Ok(ValidationResult::pass(KIND))
        } else {
            Ok(failure(KIND, self.message.as_deref(), || {
                format!("must match regular expression /^{}$/", self.pattern)
            }))
        }
    }
}
