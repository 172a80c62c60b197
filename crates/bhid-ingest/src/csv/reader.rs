//! CSV file reading into raw tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::ReaderBuilder;
use bhid_model::Value;

use crate::error::{IngestError, Result};
use crate::source::RawTable;

/// CSV parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Normalizes a header label: strips a leading BOM and surrounding whitespace.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Empty cells are absent so that column defaults apply.
fn cell_value(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        None
    } else {
        Some(Value::Text(raw.to_string()))
    }
}

/// Reads a CSV file into a raw table.
///
/// The first non-blank record is the header. Rows may have any length.
/// Records whose cells are all empty are skipped.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    read_csv_with_origin(file, options, path)
}

/// Reads CSV content from any reader (e.g. an in-memory buffer).
pub fn read_csv_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<RawTable> {
    read_csv_with_origin(reader, options, Path::new("<reader>"))
}

fn read_csv_with_origin<R: Read>(reader: R, options: &CsvOptions, origin: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            skipped += 1;
            continue;
        }
        match header {
            None => header = Some(record.iter().map(normalize_header).collect()),
            Some(_) => rows.push(record.iter().map(cell_value).collect()),
        }
    }

    let Some(header) = header else {
        return Err(IngestError::EmptyFile {
            path: origin.to_path_buf(),
        });
    };

    tracing::debug!(
        path = %origin.display(),
        columns = header.len(),
        rows = rows.len(),
        skipped_blank = skipped,
        "Read CSV table"
    );

    Ok(RawTable { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_header_and_rows() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,,6\n");
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();

        assert_eq!(table.header, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][1], None);
        assert_eq!(table.rows[1][2], Some(Value::from("6")));
    }

    #[test]
    fn test_read_csv_strips_bom_and_trims_headers() {
        let file = create_temp_csv("\u{feff} First Name ,Last Name\nAmal,Haddad\n");
        let table = read_csv_table(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(table.header, vec!["First Name", "Last Name"]);
    }

    #[test]
    fn test_read_csv_keeps_ragged_rows() {
        let table =
            read_csv_reader("A,B,C\n1\n1,2,3,4\n".as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_read_csv_skips_blank_records() {
        let table = read_csv_reader("A,B\n,\n1,2\n".as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_read_csv_custom_delimiter() {
        let options = CsvOptions { delimiter: b';' };
        let table = read_csv_reader("A;B\nx;y\n".as_bytes(), &options).unwrap();
        assert_eq!(table.header, vec!["A", "B"]);
        assert_eq!(table.rows[0][1], Some(Value::from("y")));
    }

    #[test]
    fn test_read_csv_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path(), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/input.csv"), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
