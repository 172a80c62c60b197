//! Output table assembly.

use bhid_model::{Document, Value};

use crate::error::{OutputError, Result};

/// Selected columns of each record followed by its identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

impl HashedTable {
    /// Projects `columns` out of every record and appends `id_column`.
    ///
    /// Columns a record lacks become empty cells.
    pub fn build(
        document: &Document,
        columns: &[String],
        id_column: &str,
        ids: &[String],
    ) -> Result<Self> {
        if document.len() != ids.len() {
            return Err(OutputError::LengthMismatch {
                records: document.len(),
                ids: ids.len(),
            });
        }
        let header: Vec<String> = columns
            .iter()
            .cloned()
            .chain(std::iter::once(id_column.to_string()))
            .collect();
        let rows: Vec<Vec<Option<Value>>> = document
            .data
            .iter()
            .zip(ids)
            .map(|(record, id)| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned())
                    .chain(std::iter::once(Some(Value::from(id.as_str()))))
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(Self { header, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
