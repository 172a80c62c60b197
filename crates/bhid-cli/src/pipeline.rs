//! Run stages: ingest, validate, reconcile, hash, and output.
//!
//! Each stage is a plain function so that commands can stop after any of them.
//! [`run`] chains all stages the way the `hash` and `validate` commands use them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, trace, warn};

use bhid_config::{Config, SourceConfig, load_config, load_salt};
use bhid_hash::{IdentifierBuilder, Salt, reconcile_with_policy, sha256_factory};
use bhid_ingest::read_table;
use bhid_model::{Document, DocumentSchema};
use bhid_output::{HashedTable, write_output};
use bhid_validate::ValidationReport;

use crate::logging::redact_value;
use crate::types::{DocumentSummary, RunResult};

/// How far a run goes and where it writes.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Overrides `[destination] path`.
    pub output: Option<PathBuf>,
    /// Validate and hash without writing.
    pub dry_run: bool,
    /// Stop after validation.
    pub validate_only: bool,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads one configured source and decodes it into a document.
pub fn ingest(source: &SourceConfig) -> Result<Document> {
    let name = source.document_name();
    let span = info_span!("ingest", document = %name);
    let _guard = span.enter();
    let table = read_table(&source.path, &source.source_options())
        .with_context(|| format!("read {}", source.path.display()))?;
    debug!(
        columns = table.header.len(),
        rows = table.rows.len(),
        "Read raw table"
    );
    let document = table.decode(&name, &source.columns);
    info!(records = document.len(), "Decoded document");
    Ok(document)
}

// ============================================================================
// Stage 2: Validate
// ============================================================================

/// Runs the configured rules that apply to `schema` over `document`.
pub fn validate(
    config: &Config,
    schema: &DocumentSchema,
    document: &Document,
) -> Result<ValidationReport> {
    let span = info_span!("validate", document = %document.name);
    let _guard = span.enter();
    let rules = config
        .rule_set_for(schema)
        .context("build validation rules")?;
    let report = rules
        .validate_document(document)
        .with_context(|| format!("validate {}", document.name))?;
    if !report.is_clean() {
        warn!(
            findings = report.findings.len(),
            rows = report.failing_rows().len(),
            "Validation reported findings"
        );
    }
    Ok(report)
}

// ============================================================================
// Stage 3: Reconcile
// ============================================================================

/// Columns needed for hashing, reconciled against the linked schema if any.
///
/// Without a linked source only the literal algorithm names are kept.
pub fn required_columns(
    config: &Config,
    schema: &DocumentSchema,
    linked: Option<&DocumentSchema>,
) -> Result<Vec<String>> {
    let empty = DocumentSchema::default();
    let other = linked.unwrap_or(&empty);
    let columns = reconcile_with_policy(
        &config.algorithm.required,
        schema,
        other,
        config.algorithm.shared_columns,
    )
    .context("reconcile required columns")?;
    debug!(columns = ?columns, "Required columns");
    Ok(columns)
}

/// Which part of the algorithm a reconciled column comes from.
pub fn column_role(config: &Config, column: &str) -> &'static str {
    let required = &config.algorithm.required;
    if required.to_translate.iter().any(|c| c == column) {
        "process"
    } else if required.static_fields.iter().any(|c| c == column) {
        "static"
    } else if required.reference.iter().any(|c| c == column) {
        "reference"
    } else {
        "shared"
    }
}

// ============================================================================
// Stage 4: Hash
// ============================================================================

/// Builds the identifier builder for the configured categories, order, and salt.
pub fn identifier_builder(config: &Config, salt: &Salt) -> Result<IdentifierBuilder> {
    let builder =
        IdentifierBuilder::from_factory(config.algorithm.columns(), salt, &sha256_factory())
            .with_order(&config.algorithm.order())
            .context("configure hash order")?;
    Ok(builder)
}

/// One identifier per record, in document order.
pub fn derive_identifiers(builder: &IdentifierBuilder, document: &Document) -> Vec<String> {
    let span = info_span!("hash", document = %document.name);
    let _guard = span.enter();
    let ids: Vec<String> = document
        .data
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let id = builder.identify(record);
            if tracing::enabled!(tracing::Level::TRACE) {
                let input = builder.hash_input(record);
                trace!(row, input = %redact_value(&input), id = %id, "Derived identifier");
            }
            id
        })
        .collect();
    info!(records = ids.len(), "Derived identifiers");
    ids
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Projects `columns` plus the identifier column and writes the table to `path`.
pub fn output(
    path: &Path,
    document: &Document,
    columns: &[String],
    id_column: &str,
    ids: &[String],
) -> Result<HashedTable> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    let table = HashedTable::build(document, columns, id_column, ids)
        .context("assemble output table")?;
    write_output(path, &table).with_context(|| format!("write {}", path.display()))?;
    info!(rows = table.len(), columns = table.header.len(), "Wrote output");
    Ok(table)
}

// ============================================================================
// Full run
// ============================================================================

/// Loads `config_path` and runs every stage `options` asks for.
pub fn run(config_path: &Path, options: &RunOptions) -> Result<RunResult> {
    let config = load_config(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let span = info_span!("run", config = %config_path.display());
    let _guard = span.enter();

    let (schema, linked_schema) = config.schemas()?;
    let document = ingest(&config.source)?;
    let mut documents = vec![DocumentSummary {
        name: document.name.clone(),
        path: config.source.path.clone(),
        records: document.len(),
        role: "source",
        validation: validate(&config, &schema, &document)?,
    }];
    if let (Some(linked), Some(linked_schema)) = (&config.linked_source, &linked_schema) {
        let linked_document = ingest(linked)?;
        documents.push(DocumentSummary {
            name: linked_document.name.clone(),
            path: linked.path.clone(),
            records: linked_document.len(),
            role: "linked",
            validation: validate(&config, linked_schema, &linked_document)?,
        });
    }

    let mut result = RunResult {
        config_path: config_path.to_path_buf(),
        documents,
        columns: Vec::new(),
        records_hashed: 0,
        output: None,
        dry_run: options.dry_run,
        blocked: false,
        has_errors: false,
    };
    let findings = result.finding_count();

    if options.validate_only {
        result.has_errors = findings > 0;
        return Ok(result);
    }
    if findings > 0 && config.validation.fail_on_findings {
        warn!(findings, "Validation findings block hashing");
        result.blocked = true;
        result.has_errors = true;
        return Ok(result);
    }

    result.columns = required_columns(&config, &schema, linked_schema.as_ref())?;
    let salt = load_salt(&config.salt, &config.base_dir).context("load salt")?;
    let builder = identifier_builder(&config, &salt)?;
    let ids = derive_identifiers(&builder, &document);
    result.records_hashed = ids.len();

    if options.dry_run {
        info!("Dry run: no output written");
        return Ok(result);
    }
    let path = options
        .output
        .clone()
        .unwrap_or_else(|| config.destination.path.clone());
    if path.is_dir() {
        bail!("output path {} is a directory", path.display());
    }
    output(
        &path,
        &document,
        &result.columns,
        &config.destination.id_column,
        &ids,
    )?;
    result.output = Some(path);
    Ok(result)
}
