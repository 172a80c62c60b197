//! Field and row validation for decoded beneficiary records.
//!
//! Validators are built once from declarative [`ValidatorOptions`] and reused for
//! every value in a run. Options are checked eagerly: a bad pattern, an unknown
//! type label, or an unsupported language fails in [`build_validator`], before any
//! row is processed.
//!
//! Every validator returns the same [`ValidationResult`] shape (`ok`, `kind`,
//! `message`), so callers can aggregate heterogeneous outcomes by `kind` alone.
//!
//! # Rules
//!
//! | `op` | Checks |
//! |---|---|
//! | `regex_match` | whole value matches `^pattern$` |
//! | `field_type` | value is text or number |
//! | `min_value` / `max_value` | numeric value within an inclusive bound |
//! | `min_field_length` / `max_field_length` | character length within an inclusive bound |
//! | `linked_field` | a non-empty value requires a non-empty sibling field |
//! | `language_check` | all characters belong to the configured script |
//! | `same_value_for_all_rows` | value equals the first row's value in the column |
//! | `date_diff` / `date_field_diff` | elapsed calendar interval within bounds |
//!
//! # Example
//!
//! ```ignore
//! use bhid_validate::{AggregationPolicy, RuleSet};
//!
//! let rules = RuleSet::from_options(&config.rules)?.with_policy(AggregationPolicy::CollectAll);
//! let report = rules.validate_document(&document)?;
//! for finding in &report.findings {
//!     println!("row {} {}: {}", finding.row, finding.column, finding.message);
//! }
//! ```

mod error;
mod kind;
mod options;
mod registry;
mod report;
mod result;
pub mod rules;
mod rule_set;

pub use error::{Result, ValidatorError};
pub use kind::ValidatorKind;
pub use options::ValidatorOptions;
pub use registry::{Validator, build_validator, build_validators};
pub use report::{Finding, ValidationReport};
pub use result::{ValidationContext, ValidationResult};
pub use rule_set::{AggregationPolicy, FieldRules, RuleSet, validate_document};
