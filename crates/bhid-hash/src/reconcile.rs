//! Required-column reconciliation across two document schemas.

use bhid_model::{DocumentSchema, RequiredFields};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{HashError, Result};

/// Which shared columns are added to the reconciled list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedColumnPolicy {
    /// Every column name present in both schemas.
    #[default]
    All,
    /// Only the first shared name, in the first schema's column order.
    FirstOnly,
    /// At most one shared name; more is an error.
    Strict,
}

/// Column names present in both schemas, in `doc1` order, without repeats.
pub fn shared_column_names<'a>(doc1: &'a DocumentSchema, doc2: &DocumentSchema) -> Vec<&'a str> {
    let names: IndexSet<&str> = doc1
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| doc2.columns.iter().any(|c| c.name == *name))
        .collect();
    names.into_iter().collect()
}

/// Reconciles with [`SharedColumnPolicy::All`]. Never fails.
pub fn reconcile(
    required: &RequiredFields,
    doc1: &DocumentSchema,
    doc2: &DocumentSchema,
) -> Vec<String> {
    let shared = shared_column_names(doc1, doc2);
    assemble(required, doc1, doc2, &shared)
}

/// Ordered, de-duplicated column ids needed for hashing.
///
/// The literal `to_translate`, `static`, and `reference` names come first. Then,
/// scanning `doc1` and then `doc2`, the alias of every column whose name is
/// shared (as selected by `policy`) is appended. The first occurrence of each id
/// wins.
pub fn reconcile_with_policy(
    required: &RequiredFields,
    doc1: &DocumentSchema,
    doc2: &DocumentSchema,
    policy: SharedColumnPolicy,
) -> Result<Vec<String>> {
    let mut shared = shared_column_names(doc1, doc2);
    match policy {
        SharedColumnPolicy::All => {}
        SharedColumnPolicy::FirstOnly => shared.truncate(1),
        SharedColumnPolicy::Strict if shared.len() > 1 => {
            return Err(HashError::AmbiguousSharedColumns {
                columns: shared.iter().map(ToString::to_string).collect(),
            });
        }
        SharedColumnPolicy::Strict => {}
    }
    Ok(assemble(required, doc1, doc2, &shared))
}

fn assemble(
    required: &RequiredFields,
    doc1: &DocumentSchema,
    doc2: &DocumentSchema,
    shared: &[&str],
) -> Vec<String> {
    let mut columns: IndexSet<String> = required.names().map(str::to_string).collect();
    let literal = columns.len();
    for schema in [doc1, doc2] {
        for column in &schema.columns {
            if shared.contains(&column.name.as_str()) {
                columns.insert(column.alias.clone());
            }
        }
    }
    tracing::debug!(
        literal,
        shared = ?shared,
        total = columns.len(),
        "Reconciled required columns"
    );
    columns.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use bhid_model::ColumnDefinition;

    use super::*;

    fn schema(name: &str, columns: &[(&str, &str)]) -> DocumentSchema {
        DocumentSchema::new(
            name,
            columns
                .iter()
                .map(|(n, a)| ColumnDefinition::new(*n, *a))
                .collect(),
        )
        .unwrap()
    }

    fn required() -> RequiredFields {
        RequiredFields {
            to_translate: vec!["first_name".into()],
            static_fields: vec!["dob_year".into()],
            reference: vec!["document_id".into()],
        }
    }

    fn two_keys() -> (DocumentSchema, DocumentSchema) {
        (
            schema(
                "a",
                &[("Household", "household_id"), ("Name", "first_name"), ("Case", "case_id")],
            ),
            schema("b", &[("Case", "case_ref"), ("Household", "household_id")]),
        )
    }

    #[test]
    fn test_shared_names_follow_first_schema() {
        let (a, b) = two_keys();
        assert_eq!(shared_column_names(&a, &b), vec!["Household", "Case"]);
    }

    #[test]
    fn test_all_policy_appends_aliases_from_both_schemas() {
        let (a, b) = two_keys();
        assert_eq!(
            reconcile(&required(), &a, &b),
            vec!["first_name", "dob_year", "document_id", "household_id", "case_id", "case_ref"]
        );
    }

    #[test]
    fn test_first_only_policy() {
        let (a, b) = two_keys();
        let columns =
            reconcile_with_policy(&required(), &a, &b, SharedColumnPolicy::FirstOnly).unwrap();
        assert_eq!(columns, vec!["first_name", "dob_year", "document_id", "household_id"]);
    }

    #[test]
    fn test_strict_policy_rejects_multiple_keys() {
        let (a, b) = two_keys();
        let err =
            reconcile_with_policy(&required(), &a, &b, SharedColumnPolicy::Strict).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected at most one shared column between documents, found 2: Household, Case"
        );

        let single = schema("c", &[("Household", "hh")]);
        let columns =
            reconcile_with_policy(&required(), &a, &single, SharedColumnPolicy::Strict).unwrap();
        assert_eq!(columns, vec!["first_name", "dob_year", "document_id", "household_id", "hh"]);
    }

    #[test]
    fn test_no_shared_columns_yields_literal_names() {
        let a = schema("a", &[("X", "x")]);
        let b = schema("b", &[("Y", "y")]);
        assert_eq!(reconcile(&required(), &a, &b), vec!["first_name", "dob_year", "document_id"]);
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: SharedColumnPolicy = serde_json::from_str(r#""first_only""#).unwrap();
        assert_eq!(policy, SharedColumnPolicy::FirstOnly);
    }
}
