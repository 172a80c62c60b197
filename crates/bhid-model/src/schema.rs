//! Column definitions and document schemas.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Maps a raw header label to its canonical alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Raw header label as it appears in the input file.
    pub name: String,
    /// Canonical column id used in decoded records.
    pub alias: String,
    /// Value used when the raw cell is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// The configured column set of one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSchema {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl DocumentSchema {
    /// Builds a schema, rejecting empty or duplicate aliases.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Result<Self> {
        let schema = Self {
            name: name.into(),
            columns,
        };
        schema.check()?;
        Ok(schema)
    }

    /// Checks alias invariants on an already-built schema (e.g. one deserialized from config).
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.alias.trim().is_empty() {
                return Err(ModelError::EmptyAlias {
                    schema: self.name.clone(),
                    name: column.name.clone(),
                });
            }
            if !seen.insert(column.alias.as_str()) {
                return Err(ModelError::DuplicateAlias {
                    schema: self.name.clone(),
                    alias: column.alias.clone(),
                });
            }
        }
        Ok(())
    }

    /// Alias configured for a raw header label.
    pub fn alias_for(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.alias.as_str())
    }

    /// Column definition by alias.
    pub fn column_by_alias(&self, alias: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.alias == alias)
    }
}
