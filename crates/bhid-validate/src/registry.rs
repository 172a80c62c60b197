//! Validator trait and the kind-to-constructor lookup table.

use std::fmt::Debug;

use bhid_model::Value;

use crate::error::{Result, ValidatorError};
use crate::result::{ValidationContext, ValidationResult};
use crate::rules::{
    DateDiff, DateFieldDiff, FieldType, LanguageCheck, LengthBound, LinkedField, RegexMatch,
    SameValueForAllRows, ValueBound,
};
use crate::{ValidatorKind, ValidatorOptions};

/// A configured rule.
///
/// Implementations hold only their fixed options and are safe to share across threads.
pub trait Validator: Debug + Send + Sync {
    /// The `op` tag of this rule.
    fn kind(&self) -> ValidatorKind;

    /// Validates one value.
    ///
    /// `value` is `None` when the record has no key for the column.
    /// Returns `Err` only for usage errors, e.g. a context-dependent rule called
    /// without context.
    fn validate(
        &self,
        value: Option<&Value>,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult>;
}

type Constructor = fn(&ValidatorOptions) -> Result<Box<dyn Validator>>;

const CONSTRUCTORS: &[(ValidatorKind, Constructor)] = &[
    (ValidatorKind::RegexMatch, RegexMatch::boxed),
    (ValidatorKind::FieldType, FieldType::boxed),
    (ValidatorKind::LinkedField, LinkedField::boxed),
    (ValidatorKind::LanguageCheck, LanguageCheck::boxed),
    (ValidatorKind::MinFieldLength, LengthBound::boxed_min),
    (ValidatorKind::MaxFieldLength, LengthBound::boxed_max),
    (ValidatorKind::MinValue, ValueBound::boxed_min),
    (ValidatorKind::MaxValue, ValueBound::boxed_max),
    (ValidatorKind::SameValueForAllRows, SameValueForAllRows::boxed),
    (ValidatorKind::DateDiff, DateDiff::boxed),
    (ValidatorKind::DateFieldDiff, DateFieldDiff::boxed),
];

/// Builds a validator from its options, checking them eagerly.
pub fn build_validator(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
    let (_, constructor) = CONSTRUCTORS
        .iter()
        .find(|(kind, _)| *kind == options.op)
        .ok_or(ValidatorError::Unregistered { kind: options.op })?;
    let validator = constructor(options)?;
    tracing::trace!(kind = %options.op, "Built validator");
    Ok(validator)
}

/// Builds validators for a list of options, stopping at the first configuration error.
pub fn build_validators(options: &[ValidatorOptions]) -> Result<Vec<Box<dyn Validator>>> {
    options.iter().map(build_validator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered() {
        for kind in ValidatorKind::all() {
            assert!(
                CONSTRUCTORS.iter().any(|(k, _)| k == kind),
                "missing constructor for {kind}"
            );
        }
    }

    #[test]
    fn test_built_validator_reports_its_kind() {
        let options = ValidatorOptions::new(ValidatorKind::MaxValue).with_value(10);
        let validator = build_validator(&options).unwrap();
        assert_eq!(validator.kind(), ValidatorKind::MaxValue);
    }

    #[test]
    fn test_build_validators_stops_at_bad_options() {
        let options = vec![
            ValidatorOptions::new(ValidatorKind::MinValue).with_value(1),
            ValidatorOptions::new(ValidatorKind::RegexMatch).with_value("(unclosed"),
        ];
        assert!(matches!(
            build_validators(&options),
            Err(ValidatorError::InvalidRegex { .. })
        ));
    }
}
