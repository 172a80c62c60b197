//! Hash-input assembly: extraction, normalization, and concatenation.

use bhid_model::{AlgorithmColumns, HashInput, Record, Value};

/// Looks up every column id of each category in `record`.
///
/// Ids missing from the record contribute nothing; categories are never padded.
pub fn extract_algo_columns(columns: &AlgorithmColumns, record: &Record) -> HashInput<Value> {
    let pick = |ids: &[String]| -> Vec<Value> {
        ids.iter().filter_map(|id| record.get(id)).cloned().collect()
    };
    HashInput {
        static_fields: pick(&columns.static_fields),
        process: pick(&columns.process),
        reference: pick(&columns.reference),
    }
}

/// Normalizes values for hashing: text passes through verbatim, while numbers
/// and missing values become empty strings.
pub fn clean_value_list<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    values
        .into_iter()
        .map(|value| match value {
            Some(Value::Text(text)) => text.clone(),
            Some(Value::Number(_)) | None => String::new(),
        })
        .collect()
}

/// Concatenates values with no separator.
pub fn join_fields_for_hash<S: AsRef<str>>(values: &[S]) -> String {
    values.iter().map(AsRef::as_ref).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value_list_blanks_non_text() {
        let values = [
            Some(Value::from("a")),
            Some(Value::from("b")),
            Some(Value::Number(10.0)),
            Some(Value::from("c")),
            None,
            Some(Value::from("d")),
        ];
        let cleaned = clean_value_list(values.iter().map(Option::as_ref));
        assert_eq!(cleaned, vec!["a", "b", "", "c", "", "d"]);
    }

    #[test]
    fn test_clean_value_list_keeps_whitespace() {
        let values = [Value::from(" x ")];
        assert_eq!(clean_value_list(values.iter().map(Some)), vec![" x "]);
    }

    #[test]
    fn test_join_fields_for_hash() {
        assert_eq!(join_fields_for_hash::<&str>(&[]), "");
        assert_eq!(join_fields_for_hash(&["a", "b"]), "ab");
        assert_eq!(join_fields_for_hash(&["a".to_string(), String::new(), "c".to_string()]), "ac");
    }

    #[test]
    fn test_extract_skips_absent_columns() {
        let columns = AlgorithmColumns {
            static_fields: vec!["dob_year".into()],
            process: vec!["first_name".into(), "last_name".into()],
            reference: vec!["document_id".into()],
        };

        let empty = extract_algo_columns(&columns, &Record::new());
        assert!(empty.is_empty());

        let record: Record = [
            ("last_name", Value::from("Haddad")),
            ("first_name", Value::from("Karim")),
            ("dob_year", Value::Number(1980.0)),
        ]
        .into_iter()
        .collect();
        let input = extract_algo_columns(&columns, &record);
        assert_eq!(input.process, vec![Value::from("Karim"), Value::from("Haddad")]);
        assert_eq!(input.static_fields, vec![Value::Number(1980.0)]);
        assert!(input.reference.is_empty());
    }
}
