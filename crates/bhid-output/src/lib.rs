//! Output writers for hashed records.
//!
//! A [`HashedTable`] holds the selected columns of every record plus the derived
//! identifier column. [`write_output`] picks the writer from the destination's
//! file extension.

mod common;
mod csv;
mod error;
#[cfg(feature = "excel")]
mod excel;
mod table;

use std::path::Path;

pub use crate::csv::write_csv;
pub use common::ensure_parent_dir;
pub use error::{OutputError, Result};
#[cfg(feature = "excel")]
pub use excel::write_excel;
pub use table::HashedTable;

/// Writes `table` as CSV or XLSX depending on the extension of `path`.
pub fn write_output(path: &Path, table: &HashedTable) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" | "txt" => write_csv(path, table),
        #[cfg(feature = "excel")]
        "xlsx" => write_excel(path, table),
        _ => Err(OutputError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}
