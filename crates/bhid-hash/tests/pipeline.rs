//! Reconciliation and hash-input assembly across two documents.

use bhid_hash::{
    IdentifierBuilder, Salt, clean_value_list, extract_algo_columns, join_fields_for_hash,
    reconcile, sha256_factory, sha256_hex,
};
use bhid_model::{AlgorithmColumns, ColumnDefinition, DocumentSchema, Record, RequiredFields, Value};
use proptest::prelude::*;

fn required() -> RequiredFields {
    RequiredFields {
        to_translate: vec![
            "first_name".into(),
            "last_name".into(),
            "father_first_name".into(),
            "father_last_name".into(),
            "mother_first_name".into(),
        ],
        static_fields: vec!["dob_year".into()],
        reference: vec!["document_type".into(), "document_id".into()],
    }
}

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

#[test]
fn shared_mapping_column_is_appended_once() {
    let registrations = schema(
        "registrations",
        &[
            ("First Name", "first_name"),
            ("MAPPING", "col_mapping"),
            ("Year of Birth", "dob_year"),
        ],
    );
    let payments = schema(
        "payments",
        &[("Amount", "amount"), ("MAPPING", "col_mapping")],
    );

    let columns = reconcile(&required(), &registrations, &payments);
    assert_eq!(
        columns,
        vec![
            "first_name",
            "last_name",
            "father_first_name",
            "father_last_name",
            "mother_first_name",
            "dob_year",
            "document_type",
            "document_id",
            "col_mapping",
        ]
    );
}

#[test]
fn identifiers_match_manual_assembly() {
    let columns = AlgorithmColumns::from(&required());
    let salt = Salt::new("s3cr3t", None).unwrap();
    let builder = IdentifierBuilder::from_factory(columns.clone(), &salt, &sha256_factory());

    let record: Record = [
        ("first_name", Value::from("محمد")),
        ("last_name", Value::from("علي")),
        ("dob_year", Value::Number(1990.0)),
        ("document_id", Value::from("12345")),
    ]
    .into_iter()
    .collect();

    let input = extract_algo_columns(&columns, &record);
    assert_eq!(input.process.len(), 2);
    let manual = [
        clean_value_list(input.process.iter().map(Some)),
        clean_value_list(input.static_fields.iter().map(Some)),
        clean_value_list(input.reference.iter().map(Some)),
    ]
    .concat();
    let joined = join_fields_for_hash(&manual);
    assert_eq!(joined, "محمدعلي12345");
    assert_eq!(builder.hash_input(&record), joined);
    assert_eq!(
        builder.identify(&record),
        sha256_hex(format!("s3cr3t{joined}").as_bytes())
    );
}

proptest! {
    #[test]
    fn extraction_preserves_declared_order(names in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let columns = AlgorithmColumns {
            process: names.clone(),
            ..AlgorithmColumns::default()
        };
        let record: Record = names
            .iter()
            .rev()
            .map(|n| (n.as_str(), Value::from(n.to_uppercase())))
            .collect();
        let input = extract_algo_columns(&columns, &record);
        let expected: Vec<Value> = names.iter().map(|n| Value::from(n.to_uppercase())).collect();
        prop_assert_eq!(input.process, expected);
    }

    #[test]
    fn clean_value_list_keeps_length_and_text(texts in prop::collection::vec(prop::option::of("[ -~]{0,6}"), 0..10)) {
        let values: Vec<Option<Value>> = texts.iter().map(|t| t.as_deref().map(Value::from)).collect();
        let cleaned = clean_value_list(values.iter().map(Option::as_ref));
        prop_assert_eq!(cleaned.len(), texts.len());
        for (clean, text) in cleaned.iter().zip(&texts) {
            prop_assert_eq!(clean.as_str(), text.as_deref().unwrap_or(""));
        }
    }

    #[test]
    fn join_is_plain_concatenation(parts in prop::collection::vec("[a-z]{0,4}", 0..8)) {
        prop_assert_eq!(join_fields_for_hash(&parts), parts.concat());
    }
}
