//! Raw tables and format dispatch.

use std::path::Path;

use bhid_model::{ColumnDefinition, Document, Value};

use crate::csv::{CsvOptions, read_csv_table};
use crate::decoder::decode_rows;
use crate::error::{IngestError, Result};

/// Header row plus body rows of possibly-absent cells, as read from a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

impl RawTable {
    /// Decodes this table into a document.
    pub fn decode(&self, name: &str, columns: &[ColumnDefinition]) -> Document {
        decode_rows(name, columns, &self.header, &self.rows)
    }
}

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Spreadsheet),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Per-source reading options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOptions {
    /// Sheet to read from a workbook (first sheet when unset).
    pub sheet: Option<String>,
    /// CSV parsing options.
    pub csv: CsvOptions,
}

/// Reads any supported input file into a raw table.
pub fn read_table(path: &Path, options: &SourceOptions) -> Result<RawTable> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Csv => read_csv_table(path, &options.csv),
        SourceFormat::Spreadsheet => read_spreadsheet(path, options),
    }
}

#[cfg(feature = "excel")]
fn read_spreadsheet(path: &Path, options: &SourceOptions) -> Result<RawTable> {
    crate::excel::read_excel_table(path, options.sheet.as_deref())
}

#[cfg(not(feature = "excel"))]
fn read_spreadsheet(path: &Path, _options: &SourceOptions) -> Result<RawTable> {
    Err(IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: "spreadsheet (build with the `excel` feature)".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::from_path(Path::new("data/REG.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data/reg.xlsx")).unwrap(),
            SourceFormat::Spreadsheet
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("data/reg.parquet")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            SourceFormat::from_path(Path::new("data/reg")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_raw_table_decode() {
        let table = RawTable {
            header: vec!["First Name".to_string()],
            rows: vec![vec![Some(Value::from("Amal"))]],
        };
        let columns = vec![ColumnDefinition::new("First Name", "first_name")];
        let doc = table.decode("reg", &columns);
        assert_eq!(doc.data[0].get_text("first_name"), Some("Amal"));
    }
}
