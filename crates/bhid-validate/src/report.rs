//! Aggregated outcome of validating a document.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{ValidationResult, ValidatorKind};

/// One failing rule on one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 0-based record index.
    pub row: usize,
    pub column: String,
    pub kind: ValidatorKind,
    pub message: String,
}

impl Finding {
    pub(crate) fn from_result(row: usize, column: &str, result: &ValidationResult) -> Self {
        Self {
            row,
            column: column.to_string(),
            kind: result.kind(),
            message: result.message().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub document: String,
    pub rows_checked: usize,
    pub checks_run: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn counts_by_kind(&self) -> BTreeMap<ValidatorKind, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct row indices with at least one finding, ascending.
    pub fn failing_rows(&self) -> Vec<usize> {
        self.findings
            .iter()
            .map(|f| f.row)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn findings_for_row(&self, row: usize) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.row == row)
    }
}
