//! Configuration file structure.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use bhid_hash::SharedColumnPolicy;
use bhid_ingest::{CsvOptions, SourceOptions};
use bhid_model::{
    AlgorithmColumns, ColumnDefinition, DocumentSchema, HashCategory, RequiredFields,
};
use bhid_validate::{AggregationPolicy, FieldRules, RuleSet, ValidatorOptions, build_validators};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

const DEFAULT_ID_COLUMN: &str = "id";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub linked_source: Option<SourceConfig>,
    /// Column alias to the rules applied to it, in declaration order.
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<ValidatorOptions>>,
    pub algorithm: AlgorithmConfig,
    pub salt: SaltConfig,
    pub destination: DestinationConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Directory relative paths were resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub delimiter: Option<char>,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

impl SourceConfig {
    /// Document name used in logs and reports: the file stem.
    pub fn document_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn schema(&self) -> Result<DocumentSchema> {
        DocumentSchema::new(self.document_name(), self.columns.clone())
            .map_err(|e| ConfigError::invalid(e.to_string()))
    }

    pub fn source_options(&self) -> SourceOptions {
        let mut csv = CsvOptions::default();
        if let Some(delimiter) = self.delimiter.filter(char::is_ascii) {
            csv.delimiter = delimiter as u8;
        }
        SourceOptions {
            sheet: self.sheet.clone(),
            csv,
        }
    }

    fn check(&self, section: &str) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ConfigError::invalid(format!("[{section}] declares no columns")));
        }
        if let Some(delimiter) = self.delimiter
            && !delimiter.is_ascii()
        {
            return Err(ConfigError::invalid(format!(
                "[{section}] delimiter '{delimiter}' must be a single ASCII character"
            )));
        }
        self.schema().map(|_| ())
    }
}

/// `[algorithm]`: the hash categories plus how they are combined.
///
/// Read through [`AlgorithmSection`] so that a misspelled category name is a
/// parse error instead of an empty category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "AlgorithmSection", into = "AlgorithmSection")]
pub struct AlgorithmConfig {
    pub required: RequiredFields,
    /// Category concatenation order.
    pub order: Option<Vec<HashCategory>>,
    pub shared_columns: SharedColumnPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlgorithmSection {
    #[serde(default)]
    to_translate: Vec<String>,
    #[serde(default, rename = "static")]
    static_fields: Vec<String>,
    #[serde(default)]
    reference: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<Vec<HashCategory>>,
    #[serde(default)]
    shared_columns: SharedColumnPolicy,
}

impl From<AlgorithmSection> for AlgorithmConfig {
    fn from(section: AlgorithmSection) -> Self {
        Self {
            required: RequiredFields {
                to_translate: section.to_translate,
                static_fields: section.static_fields,
                reference: section.reference,
            },
            order: section.order,
            shared_columns: section.shared_columns,
        }
    }
}

impl From<AlgorithmConfig> for AlgorithmSection {
    fn from(config: AlgorithmConfig) -> Self {
        Self {
            to_translate: config.required.to_translate,
            static_fields: config.required.static_fields,
            reference: config.required.reference,
            order: config.order,
            shared_columns: config.shared_columns,
        }
    }
}

impl AlgorithmConfig {
    pub fn columns(&self) -> AlgorithmColumns {
        AlgorithmColumns::from(&self.required)
    }

    pub fn order(&self) -> Vec<HashCategory> {
        self.order
            .clone()
            .unwrap_or_else(|| HashCategory::DEFAULT_ORDER.to_vec())
    }
}

/// Salt source: a file (`path`) or an inline `value`, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaltConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DestinationConfig {
    pub path: PathBuf,
    #[serde(default = "default_id_column")]
    pub id_column: String,
}

fn default_id_column() -> String {
    DEFAULT_ID_COLUMN.to_string()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    #[serde(default)]
    pub policy: AggregationPolicy,
    /// Abort the run when validation reports any finding.
    #[serde(default)]
    pub fail_on_findings: bool,
}

fn resolve(base_dir: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base_dir.join(&*path);
    }
}

impl Config {
    /// Parses a configuration, resolving relative paths against `base_dir`.
    ///
    /// Does not call [`Config::validate`].
    pub fn from_toml_str(contents: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: base_dir.to_path_buf(),
            source,
        })?;
        config.base_dir = base_dir.to_path_buf();
        resolve(base_dir, &mut config.source.path);
        if let Some(linked) = &mut config.linked_source {
            resolve(base_dir, &mut linked.path);
        }
        if let Some(salt) = &mut config.salt.path {
            resolve(base_dir, salt);
        }
        resolve(base_dir, &mut config.destination.path);
        Ok(config)
    }

    /// Checks cross-section consistency and builds every validator once.
    pub fn validate(&self) -> Result<()> {
        self.source.check("source")?;
        if let Some(linked) = &self.linked_source {
            linked.check("linked_source")?;
        }

        if self.algorithm.required.is_empty() {
            return Err(ConfigError::invalid("[algorithm] declares no hash fields"));
        }
        let order = self.algorithm.order();
        let distinct: HashSet<_> = order.iter().collect();
        if distinct.len() != order.len() {
            return Err(ConfigError::invalid(
                "[algorithm] order lists a category more than once",
            ));
        }

        match (&self.salt.path, &self.salt.value) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::invalid("[salt] sets both path and value"));
            }
            (None, None) => return Err(ConfigError::invalid("[salt] needs a path or a value")),
            _ => {}
        }

        if self.destination.id_column.trim().is_empty() {
            return Err(ConfigError::invalid("[destination] id_column must not be empty"));
        }

        let aliases: HashSet<&str> = self.schemas_columns().map(|c| c.alias.as_str()).collect();
        if let Some(unknown) = self.rules.keys().find(|k| !aliases.contains(k.as_str())) {
            return Err(ConfigError::invalid(format!(
                "[rules] column '{unknown}' is not a configured alias"
            )));
        }

        self.rule_set().map(|_| ())
    }

    /// Builds the validators of `[rules]` with the configured policy.
    pub fn rule_set(&self) -> Result<RuleSet> {
        self.build_rule_set(|_| true)
    }

    /// Like [`Config::rule_set`], keeping only rules for columns `schema` declares.
    pub fn rule_set_for(&self, schema: &DocumentSchema) -> Result<RuleSet> {
        self.build_rule_set(|column| schema.column_by_alias(column).is_some())
    }

    fn build_rule_set(&self, keep: impl Fn(&str) -> bool) -> Result<RuleSet> {
        let fields = self
            .rules
            .iter()
            .filter(|(column, _)| keep(column.as_str()))
            .map(|(column, options)| {
                let validators =
                    build_validators(options).map_err(|source| ConfigError::Validator {
                        column: column.clone(),
                        source,
                    })?;
                Ok(FieldRules {
                    column: column.clone(),
                    validators,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet::new(fields).with_policy(self.validation.policy))
    }

    /// Source schema, and the linked schema if configured.
    pub fn schemas(&self) -> Result<(DocumentSchema, Option<DocumentSchema>)> {
        let linked = self
            .linked_source
            .as_ref()
            .map(SourceConfig::schema)
            .transpose()?;
        Ok((self.source.schema()?, linked))
    }

    fn schemas_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.source
            .columns
            .iter()
            .chain(self.linked_source.iter().flat_map(|s| s.columns.iter()))
    }
}
