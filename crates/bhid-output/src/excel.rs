//! XLSX output.

use std::path::Path;

use bhid_model::Value;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};
use crate::table::HashedTable;

/// Writes the table to the first worksheet of a new workbook. Numbers stay numeric.
pub fn write_excel(path: &Path, table: &HashedTable) -> Result<()> {
    ensure_parent_dir(path)?;
    fill_and_save(path, table).map_err(|source| OutputError::Excel {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "Wrote XLSX output");
    Ok(())
}

fn fill_and_save(path: &Path, table: &HashedTable) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, label) in table.header.iter().enumerate() {
        sheet.write_string(0, col as u16, label)?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        let excel_row = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Some(Value::Text(text)) => {
                    sheet.write_string(excel_row, col as u16, text)?;
                }
                Some(Value::Number(number)) => {
                    sheet.write_number(excel_row, col as u16, *number)?;
                }
                None => {}
            }
        }
    }
    workbook.save(path)
}
