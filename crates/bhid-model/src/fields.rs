//! Hash field declarations and hash input categories.

use serde::{Deserialize, Serialize};

/// Required-field declaration: logical field names grouped by how they feed the hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredFields {
    /// Fields whose values are translated/processed before hashing.
    #[serde(default)]
    pub to_translate: Vec<String>,
    /// Fields hashed verbatim.
    #[serde(default, rename = "static")]
    pub static_fields: Vec<String>,
    /// Fields referencing identity documents.
    #[serde(default)]
    pub reference: Vec<String>,
}

impl RequiredFields {
    /// All declared names in `to_translate`, `static`, `reference` order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.to_translate
            .iter()
            .chain(&self.static_fields)
            .chain(&self.reference)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.to_translate.is_empty() && self.static_fields.is_empty() && self.reference.is_empty()
    }
}

/// Hash input category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashCategory {
    Process,
    Static,
    Reference,
}

impl HashCategory {
    /// Concatenation order used when the caller does not choose one.
    pub const DEFAULT_ORDER: [HashCategory; 3] = [
        HashCategory::Process,
        HashCategory::Static,
        HashCategory::Reference,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Static => "static",
            Self::Reference => "reference",
        }
    }
}

/// Column ids selected per hash category.
pub type AlgorithmColumns = HashInput<String>;

/// Per-category values feeding the identifier hash.
///
/// Category structure is kept through extraction and normalization; only
/// [`HashInput::into_ordered`] flattens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashInput<T> {
    #[serde(rename = "static")]
    pub static_fields: Vec<T>,
    pub process: Vec<T>,
    pub reference: Vec<T>,
}

impl<T> Default for HashInput<T> {
    fn default() -> Self {
        Self {
            static_fields: Vec::new(),
            process: Vec::new(),
            reference: Vec::new(),
        }
    }
}

impl<T> HashInput<T> {
    /// Applies `f` to every category, keeping structure.
    pub fn map<U, F>(self, mut f: F) -> HashInput<U>
    where
        F: FnMut(Vec<T>) -> Vec<U>,
    {
        HashInput {
            static_fields: f(self.static_fields),
            process: f(self.process),
            reference: f(self.reference),
        }
    }

    /// Flattens categories in the given order. Categories not listed are dropped.
    pub fn into_ordered(self, order: &[HashCategory]) -> Vec<T> {
        let mut static_fields = Some(self.static_fields);
        let mut process = Some(self.process);
        let mut reference = Some(self.reference);
        let mut out = Vec::new();
        for category in order {
            let slot = match category {
                HashCategory::Process => process.take(),
                HashCategory::Static => static_fields.take(),
                HashCategory::Reference => reference.take(),
            };
            if let Some(values) = slot {
                out.extend(values);
            }
        }
        out
    }

    /// Total number of entries across categories.
    pub fn len(&self) -> usize {
        self.static_fields.len() + self.process.len() + self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&RequiredFields> for AlgorithmColumns {
    fn from(required: &RequiredFields) -> Self {
        Self {
            static_fields: required.static_fields.clone(),
            process: required.to_translate.clone(),
            reference: required.reference.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> RequiredFields {
        RequiredFields {
            to_translate: vec!["first_name".into(), "last_name".into()],
            static_fields: vec!["dob_year".into()],
            reference: vec!["document_id".into()],
        }
    }

    #[test]
    fn test_names_order() {
        let binding = required();
        let names: Vec<&str> = binding.names().collect();
        assert_eq!(names, vec!["first_name", "last_name", "dob_year", "document_id"]);
    }

    #[test]
    fn test_algorithm_columns_from_required() {
        let columns = AlgorithmColumns::from(&required());
        assert_eq!(columns.process, vec!["first_name", "last_name"]);
        assert_eq!(columns.static_fields, vec!["dob_year"]);
        assert_eq!(columns.reference, vec!["document_id"]);
    }

    #[test]
    fn test_into_ordered_respects_order_and_skips_repeats() {
        let input = AlgorithmColumns::from(&required());
        let ordered = input.clone().into_ordered(&[
            HashCategory::Reference,
            HashCategory::Static,
            HashCategory::Reference,
        ]);
        assert_eq!(ordered, vec!["document_id", "dob_year"]);
        assert_eq!(
            input.into_ordered(&HashCategory::DEFAULT_ORDER),
            vec!["first_name", "last_name", "dob_year", "document_id"]
        );
    }

    #[test]
    fn test_required_fields_deserialize_static_key() {
        let required: RequiredFields =
            serde_json::from_str(r#"{"to_translate":["a"],"static":["b"]}"#).unwrap();
        assert_eq!(required.static_fields, vec!["b"]);
        assert!(required.reference.is_empty());
    }
}
