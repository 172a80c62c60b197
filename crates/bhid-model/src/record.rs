//! Decoded records and documents.

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use crate::Value;

/// A decoded row keyed by canonical column id.
///
/// Keys are present only when a value was supplied or a default exists.
/// Key order follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, keeping the original position if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the text stored under `key`, if it is a text value.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_text)
    }

    /// True when `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// A named, ordered sequence of records decoded from one input source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub data: Vec<Record>,
}

impl Document {
    pub fn new(name: impl Into<String>, data: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First record, used as the reference row by whole-column checks.
    pub fn first(&self) -> Option<&Record> {
        self.data.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("last_name", Value::from("Haddad"));
        record.insert("first_name", Value::from("Amal"));
        record.insert("dob_year", Value::Number(1990.0));

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["last_name", "first_name", "dob_year"]);
        assert_eq!(record.get_text("first_name"), Some("Amal"));
        assert_eq!(record.get_text("dob_year"), None);
    }

    #[test]
    fn test_document_counts_empty_records() {
        let doc = Document::new(
            "doc",
            vec![
                Record::from_iter([("a", Value::from("1"))]),
                Record::from_iter([("b", Value::from("2")), ("a", Value::from("3"))]),
                Record::new(),
            ],
        );
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.first().and_then(|r| r.get_text("a")), Some("1"));
    }

    #[test]
    fn test_record_serializes_as_object() {
        let record = Record::from_iter([("a", Value::from("x")), ("n", Value::Number(3.0))]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"a":"x","n":3.0}"#);
    }
}
