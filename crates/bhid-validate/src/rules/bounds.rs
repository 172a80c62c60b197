//! Numeric value bounds (`min_value`, `max_value`) and length bounds
//! (`min_field_length`, `max_field_length`). All bounds are inclusive.

use bhid_model::Value;

use super::{failure, format_threshold};
use crate::error::Result;
use crate::registry::Validator;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

const NOT_TEXT_OR_NUMBER: &str = "must be text or a number";

/// Direction of a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    fn admits<T: PartialOrd>(&self, actual: T, threshold: T) -> bool {
        match self {
            Self::Min => actual >= threshold,
            Self::Max => actual <= threshold,
        }
    }
}

/// Coerces a value to a number. Blank or unparsable text is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => *number,
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
    };
    number.is_finite().then_some(number)
}

/// `min_value` / `max_value`.
#[derive(Debug, Clone)]
pub struct ValueBound {
    bound: Bound,
    threshold: f64,
    message: Option<String>,
}

impl ValueBound {
    pub fn new(options: &ValidatorOptions, bound: Bound) -> Result<Self> {
        let threshold = options.value_number()?;
        Ok(Self {
            bound,
            threshold,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed_min(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options, Bound::Min)?))
    }

    pub(crate) fn boxed_max(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options, Bound::Max)?))
    }
}

impl Validator for ValueBound {
    fn kind(&self) -> ValidatorKind {
        match self.bound {
            Bound::Min => ValidatorKind::MinValue,
            Bound::Max => ValidatorKind::MaxValue,
        }
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let kind = self.kind();
        let Some(number) = value.and_then(coerce_number) else {
            return Ok(failure(kind, self.message.as_deref(), || {
                NOT_TEXT_OR_NUMBER.to_string()
            }));
        };
        if self.bound.admits(number, self.threshold) {
            return Ok(ValidationResult::pass(kind));
        }
        Ok(failure(kind, self.message.as_deref(), || {
            let threshold = format_threshold(self.threshold);
            match self.bound {
                Bound::Min => format!("must be at least {threshold}"),
                Bound::Max => format!("must be at most {threshold}"),
            }
        }))
    }
}

/// `min_field_length` / `max_field_length`, measured in characters.
#[derive(Debug, Clone)]
pub struct LengthBound {
    bound: Bound,
    threshold: usize,
    message: Option<String>,
}

impl LengthBound {
    pub fn new(options: &ValidatorOptions, bound: Bound) -> Result<Self> {
        let number = options.value_number()?;
        if number < 0.0 || number.fract() != 0.0 {
            return Err(options.invalid(
                "value",
                format!("length must be a non-negative integer, got {number}"),
            ));
        }
        Ok(Self {
            bound,
            threshold: number as usize,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed_min(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options, Bound::Min)?))
    }

    pub(crate) fn boxed_max(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options, Bound::Max)?))
    }
}

impl Validator for LengthBound {
    fn kind(&self) -> ValidatorKind {
        match self.bound {
            Bound::Min => ValidatorKind::MinFieldLength,
            Bound::Max => ValidatorKind::MaxFieldLength,
        }
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let kind = self.kind();
        let Some(value) = value else {
            return Ok(failure(kind, self.message.as_deref(), || {
                NOT_TEXT_OR_NUMBER.to_string()
            }));
        };
        let length = value.to_string().chars().count();
        if self.bound.admits(length, self.threshold) {
            return Ok(ValidationResult::pass(kind));
        }
        Ok(failure(kind, self.message.as_deref(), || match self.bound {
            Bound::Min => format!("must be longer than {} characters", self.threshold),
            Bound::Max => format!("must be shorter than {} characters", self.threshold),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidatorError;

    fn value_rule(kind: ValidatorKind, threshold: f64) -> ValueBound {
        let bound = if kind == ValidatorKind::MinValue {
            Bound::Min
        } else {
            Bound::Max
        };
        ValueBound::new(&ValidatorOptions::new(kind).with_value(threshold), bound).unwrap()
    }

    fn check(rule: &dyn Validator, value: Value) -> ValidationResult {
        rule.validate(Some(&value), None).unwrap()
    }

    #[test]
    fn test_min_value_boundary_is_inclusive() {
        let rule = value_rule(ValidatorKind::MinValue, 18.0);
        assert!(check(&rule, Value::Number(18.0)).is_ok());
        assert!(check(&rule, Value::from("18")).is_ok());
        let result = check(&rule, Value::from("17.5"));
        assert_eq!(result.message(), Some("must be at least 18"));
    }

    #[test]
    fn test_max_value_boundary_is_inclusive() {
        let rule = value_rule(ValidatorKind::MaxValue, 2.5);
        assert!(check(&rule, Value::Number(2.5)).is_ok());
        let result = check(&rule, Value::Number(3.0));
        assert_eq!(result.kind(), ValidatorKind::MaxValue);
        assert_eq!(result.message(), Some("must be at most 2.5"));
    }

    #[test]
    fn test_coercion_failures_are_distinct_from_range_failures() {
        for threshold in [-100.0, 0.0, 100.0] {
            for kind in [ValidatorKind::MinValue, ValidatorKind::MaxValue] {
                let rule = value_rule(kind, threshold);
                for bad in ["abc", "", "   ", "12abc", "NaN"] {
                    let result = check(&rule, Value::from(bad));
                    assert_eq!(result.message(), Some(NOT_TEXT_OR_NUMBER), "{bad:?}");
                }
                let result = rule.validate(None, None).unwrap();
                assert_eq!(result.message(), Some(NOT_TEXT_OR_NUMBER));
            }
        }
    }

    #[test]
    fn test_numeric_text_with_padding_is_coerced() {
        let rule = value_rule(ValidatorKind::MinValue, 1.0);
        assert!(check(&rule, Value::from(" 5 ")).is_ok());
    }

    #[test]
    fn test_threshold_must_be_numeric() {
        let options = ValidatorOptions::new(ValidatorKind::MinValue).with_value("ten");
        assert!(matches!(
            ValueBound::new(&options, Bound::Min),
            Err(ValidatorError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_length_bounds() {
        let min = LengthBound::new(
            &ValidatorOptions::new(ValidatorKind::MinFieldLength).with_value(3),
            Bound::Min,
        )
        .unwrap();
        assert!(check(&min, Value::from("abc")).is_ok());
        assert!(check(&min, Value::Number(1234.0)).is_ok());
        let result = check(&min, Value::from("ab"));
        assert_eq!(result.message(), Some("must be longer than 3 characters"));

        let max = LengthBound::new(
            &ValidatorOptions::new(ValidatorKind::MaxFieldLength).with_value(4),
            Bound::Max,
        )
        .unwrap();
        assert!(check(&max, Value::from("عبدا")).is_ok());
        let result = check(&max, Value::from("abcde"));
        assert_eq!(result.message(), Some("must be shorter than 4 characters"));
        assert_eq!(
            max.validate(None, None).unwrap().message(),
            Some(NOT_TEXT_OR_NUMBER)
        );
    }

    #[test]
    fn test_length_threshold_must_be_whole() {
        let options = ValidatorOptions::new(ValidatorKind::MaxFieldLength).with_value(2.5);
        assert!(LengthBound::new(&options, Bound::Max).is_err());
    }
}
