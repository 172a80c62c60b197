//! Integration tests for column mapping and record decoding.

use bhid_ingest::{ColumnMapper, CsvOptions, decode_rows, read_csv_reader};
use bhid_model::{ColumnDefinition, Value};
use proptest::prelude::*;

fn definitions(count: usize, with_default: bool) -> Vec<ColumnDefinition> {
    (0..count)
        .map(|idx| {
            let column = ColumnDefinition::new(format!("Header {idx}"), format!("col_{idx}"));
            if with_default {
                column.with_default(format!("default_{idx}"))
            } else {
                column
            }
        })
        .collect()
}

fn headers(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("Header {idx}")).collect()
}

proptest! {
    #[test]
    fn supplied_values_round_trip_by_alias(values in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..8)) {
        let columns = definitions(values.len(), true);
        let row: Vec<Option<Value>> = values.iter().map(|v| Some(Value::from(v.as_str()))).collect();
        let doc = decode_rows("doc", &columns, &headers(values.len()), &[row]);

        let record = &doc.data[0];
        prop_assert_eq!(record.len(), values.len());
        for (idx, value) in values.iter().enumerate() {
            let alias = format!("col_{idx}");
            prop_assert_eq!(record.get_text(&alias), Some(value.as_str()));
        }
    }

    #[test]
    fn absent_cells_use_default_or_are_omitted(
        present in prop::collection::vec(any::<bool>(), 1..8),
        with_default in any::<bool>(),
    ) {
        let columns = definitions(present.len(), with_default);
        let row: Vec<Option<Value>> = present
            .iter()
            .map(|p| if *p { Some(Value::from("x")) } else { None })
            .collect();
        let doc = decode_rows("doc", &columns, &headers(present.len()), &[row]);

        let record = &doc.data[0];
        for (idx, p) in present.iter().enumerate() {
            let alias = format!("col_{idx}");
            match (p, with_default) {
                (true, _) => prop_assert_eq!(record.get_text(&alias), Some("x")),
                (false, true) => {
                    let expected = format!("default_{idx}");
                    prop_assert_eq!(record.get_text(&alias), Some(expected.as_str()));
                }
                (false, false) => prop_assert!(!record.contains(&alias)),
            }
        }
    }

    #[test]
    fn unconfigured_labels_are_unchanged(labels in prop::collection::vec("[A-Za-z_]{1,10}", 0..10)) {
        let columns = vec![ColumnDefinition::new("Configured Label", "configured")];
        let mapper = ColumnMapper::new(&columns);
        prop_assert_eq!(mapper.map_headers(&labels), labels);
    }
}

#[test]
fn csv_to_document_applies_aliases_and_defaults() {
    let content = "First Name,Last Name,Gender,Phone\nAmal,Haddad,,0790\nSami,,M\n";
    let table = read_csv_reader(content.as_bytes(), &CsvOptions::default()).unwrap();
    let columns = vec![
        ColumnDefinition::new("First Name", "first_name"),
        ColumnDefinition::new("Last Name", "last_name"),
        ColumnDefinition::new("Gender", "gender").with_default("U"),
    ];

    let doc = table.decode("registrations", &columns);

    assert_eq!(doc.len(), 2);
    let first: Vec<(&str, String)> = doc.data[0]
        .iter()
        .map(|(k, v)| (k.as_str(), v.to_string()))
        .collect();
    assert_eq!(
        first,
        vec![
            ("first_name", "Amal".to_string()),
            ("last_name", "Haddad".to_string()),
            ("gender", "U".to_string()),
            ("Phone", "0790".to_string()),
        ]
    );

    let second = &doc.data[1];
    assert_eq!(second.get_text("gender"), Some("M"));
    assert!(!second.contains("last_name"));
    assert!(!second.contains("Phone"));
}
