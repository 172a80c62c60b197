//! Header label to alias resolution.

use std::collections::HashMap;

use bhid_model::ColumnDefinition;

/// Resolves raw header labels to canonical column ids.
///
/// Labels without a configured column pass through unchanged. When two
/// definitions share a `name`, the first one wins.
#[derive(Debug, Clone)]
pub struct ColumnMapper<'a> {
    by_name: HashMap<&'a str, &'a str>,
}

impl<'a> ColumnMapper<'a> {
    pub fn new(columns: &'a [ColumnDefinition]) -> Self {
        let mut by_name = HashMap::with_capacity(columns.len());
        for column in columns {
            by_name
                .entry(column.name.as_str())
                .or_insert(column.alias.as_str());
        }
        Self { by_name }
    }

    /// Canonical id for one label.
    pub fn resolve<'l>(&self, label: &'l str) -> &'l str
    where
        'a: 'l,
    {
        self.by_name.get(label).copied().unwrap_or(label)
    }

    /// True when the label is governed by a column definition.
    pub fn is_configured(&self, label: &str) -> bool {
        self.by_name.contains_key(label)
    }

    /// Canonical ids for an ordered header row.
    pub fn map_headers<S: AsRef<str>>(&self, headers: &[S]) -> Vec<String> {
        headers
            .iter()
            .map(|label| self.resolve(label.as_ref()).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("First Name", "first_name"),
            ColumnDefinition::new("Last Name", "last_name"),
            ColumnDefinition::new("First Name", "given_name"),
        ]
    }

    #[test]
    fn test_configured_labels_resolve_to_alias() {
        let columns = columns();
        let mapper = ColumnMapper::new(&columns);
        assert_eq!(
            mapper.map_headers(&["Last Name", "First Name"]),
            vec!["last_name", "first_name"]
        );
    }

    #[test]
    fn test_unconfigured_labels_pass_through() {
        let columns = columns();
        let mapper = ColumnMapper::new(&columns);
        assert_eq!(
            mapper.map_headers(&["Phone", "first_name", ""]),
            vec!["Phone", "first_name", ""]
        );
        assert!(!mapper.is_configured("Phone"));
        assert!(mapper.is_configured("First Name"));
    }

    #[test]
    fn test_empty_configuration_is_identity() {
        let mapper = ColumnMapper::new(&[]);
        assert_eq!(mapper.map_headers(&["A", "B"]), vec!["A", "B"]);
    }
}
