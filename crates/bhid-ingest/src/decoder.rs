//! Record decoding from raw header/row pairs.

use std::collections::{HashMap, HashSet};

use bhid_model::{ColumnDefinition, Document, Record, Value};

use crate::mapper::ColumnMapper;

/// Decodes a raw table whose first row holds the header labels.
///
/// Header cells are rendered as text; an absent header cell becomes an empty label.
pub fn decode_table(name: &str, columns: &[ColumnDefinition], data: &[Vec<Option<Value>>]) -> Document {
    let Some((header, body)) = data.split_first() else {
        return Document::new(name, Vec::new());
    };
    let header: Vec<String> = header
        .iter()
        .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect();
    decode_rows(name, columns, &header, body)
}

/// Decodes body rows against a pre-split header.
///
/// For each configured column (in definition order) the record gets the
/// supplied value, else the configured default, else no key at all.
/// Unconfigured columns follow with their raw label as key and are kept only
/// when a value was supplied. Rows are zipped positionally: short rows yield
/// absent trailing cells and surplus cells are ignored.
pub fn decode_rows<S: AsRef<str>>(
    name: &str,
    columns: &[ColumnDefinition],
    header: &[S],
    body: &[Vec<Option<Value>>],
) -> Document {
    let mapper = ColumnMapper::new(columns);
    let ids = mapper.map_headers(header);

    let aliases: HashSet<&str> = columns.iter().map(|c| c.alias.as_str()).collect();
    let pass_through: Vec<(usize, &str)> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !aliases.contains(id.as_str()))
        .map(|(idx, id)| (idx, id.as_str()))
        .collect();

    let mut ragged = 0usize;
    let data: Vec<Record> = body
        .iter()
        .map(|row| {
            if row.len() != ids.len() {
                ragged += 1;
            }
            decode_row(columns, &ids, &pass_through, row)
        })
        .collect();

    if ragged > 0 {
        tracing::warn!(
            document = name,
            ragged_rows = ragged,
            columns = ids.len(),
            "Rows with a cell count different from the header were zipped positionally"
        );
    }
    tracing::debug!(
        document = name,
        rows = data.len(),
        configured = columns.len(),
        passthrough = pass_through.len(),
        "Decoded document"
    );

    Document::new(name, data)
}

fn decode_row(
    columns: &[ColumnDefinition],
    ids: &[String],
    pass_through: &[(usize, &str)],
    row: &[Option<Value>],
) -> Record {
    // Later duplicates of an id overwrite earlier ones, like a keyed zip.
    let mut zipped: HashMap<&str, &Value> = HashMap::with_capacity(ids.len());
    for (idx, id) in ids.iter().enumerate() {
        if let Some(Some(value)) = row.get(idx) {
            zipped.insert(id.as_str(), value);
        } else {
            zipped.remove(id.as_str());
        }
    }

    let mut record = Record::new();
    for column in columns {
        match (zipped.get(column.alias.as_str()), &column.default) {
            (Some(value), _) => {
                record.insert(column.alias.clone(), (*value).clone());
            }
            (None, Some(default)) => {
                record.insert(column.alias.clone(), Value::Text(default.clone()));
            }
            (None, None) => {}
        }
    }
    for (_, id) in pass_through {
        if record.contains(id) {
            continue;
        }
        if let Some(value) = zipped.get(id) {
            record.insert(*id, (*value).clone());
        }
    }
    record
}
