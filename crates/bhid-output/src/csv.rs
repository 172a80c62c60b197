//! CSV output.

use std::path::Path;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};
use crate::table::HashedTable;

/// Writes the table as comma-separated UTF-8. Absent cells are written empty.
pub fn write_csv(path: &Path, table: &HashedTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = ::csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(&table.header).map_err(csv_error)?;
    for row in &table.rows {
        let cells = row
            .iter()
            .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default());
        writer.write_record(cells).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "Wrote CSV output");
    Ok(())
}
