//! Spreadsheet reading (`.xlsx`, `.xls`, `.ods`) via calamine.

use std::path::Path;

use bhid_model::Value;
use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use chrono::Timelike;

use crate::error::{IngestError, Result};
use crate::source::RawTable;

/// Reads one sheet of a workbook into a raw table.
///
/// Picks `sheet` if provided, otherwise the first sheet. The first non-empty
/// row is the header; fully empty rows after it are skipped.
pub fn read_excel_table(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, &e))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptyFile {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| workbook_error(path, &e))?;
    let table = range_to_table(&range).ok_or_else(|| IngestError::EmptyFile {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = table.header.len(),
        rows = table.rows.len(),
        "Read spreadsheet table"
    );
    Ok(table)
}

fn workbook_error(path: &Path, err: &calamine::Error) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn range_to_table(range: &Range<Data>) -> Option<RawTable> {
    let mut rows = range
        .rows()
        .filter(|row| row.iter().any(|cell| cell_value(cell).is_some()));
    let header = rows
        .next()?
        .iter()
        .map(|cell| cell_value(cell).map(|v| v.to_string().trim().to_string()).unwrap_or_default())
        .collect();
    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    Some(RawTable { header, rows })
}

/// Converts a spreadsheet cell. Empty and error cells are absent.
fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) if text.is_empty() => None,
        Data::String(text) => Some(Value::Text(text.clone())),
        Data::Float(number) => Some(Value::Number(*number)),
        Data::Int(number) => Some(Value::Number(*number as f64)),
        Data::Bool(flag) => Some(Value::Text(flag.to_string())),
        Data::DateTime(datetime) => Some(datetime_value(datetime)),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Some(Value::Text(text.clone())),
    }
}

/// Date cells become ISO text, like `DateTimeIso` cells and CSV input.
/// Durations and out-of-range serials stay numeric.
fn datetime_value(datetime: &ExcelDateTime) -> Value {
    if datetime.is_duration() {
        return Value::Number(datetime.as_f64());
    }
    match datetime.as_datetime() {
        Some(moment) if moment.num_seconds_from_midnight() == 0 => {
            Value::Text(moment.format("%Y-%m-%d").to_string())
        }
        Some(moment) => Value::Text(moment.format("%Y-%m-%dT%H:%M:%S").to_string()),
        None => Value::Number(datetime.as_f64()),
    }
}
