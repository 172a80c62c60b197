//! Per-column validator lists and document-level evaluation.

use bhid_model::{Document, Record};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{Validator, build_validators};
use crate::report::{Finding, ValidationReport};
use crate::{ValidationContext, ValidationResult, ValidatorOptions};

/// How many failures one field may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Run every rule of the field and report all failures.
    #[default]
    CollectAll,
    /// Stop evaluating a field at its first failure.
    FirstFailure,
}

/// Validators attached to one column, in declaration order.
#[derive(Debug)]
pub struct FieldRules {
    pub column: String,
    pub validators: Vec<Box<dyn Validator>>,
}

#[derive(Debug, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
    policy: AggregationPolicy,
}

impl RuleSet {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self {
            fields,
            policy: AggregationPolicy::default(),
        }
    }

    /// Builds every validator up front. Any bad option fails the whole set.
    pub fn from_options<'a, I, K>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, &'a Vec<ValidatorOptions>)>,
        K: AsRef<str>,
    {
        let fields = columns
            .into_iter()
            .map(|(column, options)| {
                Ok(FieldRules {
                    column: column.as_ref().to_string(),
                    validators: build_validators(options)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            columns = fields.len(),
            validators = fields.iter().map(|f| f.validators.len()).sum::<usize>(),
            "Built rule set"
        );
        Ok(Self::new(fields))
    }

    #[must_use]
    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.column.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.validators.is_empty())
    }

    /// Runs the rules of one column against a row, returning only failures.
    pub fn validate_field(
        &self,
        field: &FieldRules,
        row: &Record,
        document: &Document,
    ) -> Result<Vec<ValidationResult>> {
        let value = row.get(&field.column);
        let context = ValidationContext::new(row, document, &field.column);
        let mut failures = Vec::new();
        for validator in &field.validators {
            let context = validator.kind().requires_context().then_some(&context);
            let result = validator.validate(value, context)?;
            if !result.is_ok() {
                failures.push(result);
                if self.policy == AggregationPolicy::FirstFailure {
                    break;
                }
            }
        }
        Ok(failures)
    }

    /// Validates every record of the document.
    ///
    /// Failing values become findings; only usage errors abort the run.
    pub fn validate_document(&self, document: &Document) -> Result<ValidationReport> {
        let mut report = ValidationReport::new(&document.name);
        for (index, row) in document.data.iter().enumerate() {
            for field in &self.fields {
                report.checks_run += field.validators.len();
                for failure in self.validate_field(field, row, document)? {
                    tracing::trace!(
                        row = index,
                        column = %field.column,
                        kind = %failure.kind(),
                        "Validation finding"
                    );
                    report
                        .findings
                        .push(Finding::from_result(index, &field.column, &failure));
                }
            }
            report.rows_checked += 1;
        }
        tracing::info!(
            document = %report.document,
            rows = report.rows_checked,
            findings = report.findings.len(),
            "Validated document"
        );
        Ok(report)
    }
}

/// Validates `document` with `rules` under the given policy.
pub fn validate_document(
    document: &Document,
    rules: RuleSet,
    policy: AggregationPolicy,
) -> Result<ValidationReport> {
    rules.with_policy(policy).validate_document(document)
}
