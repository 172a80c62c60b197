use std::path::PathBuf;

use bhid_validate::ValidationReport;

#[derive(Debug)]
pub struct RunResult {
    pub config_path: PathBuf,
    pub documents: Vec<DocumentSummary>,
    /// Columns written next to the identifier, in output order.
    pub columns: Vec<String>,
    pub records_hashed: usize,
    /// Written file, `None` for dry runs and blocked runs.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    /// Set when findings stopped the run before hashing.
    pub blocked: bool,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct DocumentSummary {
    pub name: String,
    pub path: PathBuf,
    pub records: usize,
    /// Role of the document in the run ("source" or "linked").
    pub role: &'static str,
    pub validation: ValidationReport,
}

impl RunResult {
    pub fn finding_count(&self) -> usize {
        self.documents
            .iter()
            .map(|doc| doc.validation.findings.len())
            .sum()
    }
}
