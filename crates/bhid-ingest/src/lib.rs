//! Tabular ingestion for beneficiary identifier hashing.
//!
//! This crate turns input files into canonical documents:
//!
//! - **Raw tables**: [`read_table`] reads CSV (and, with the `excel` feature, XLSX/XLS/ODS)
//!   files into a [`RawTable`] of possibly-absent cells
//! - **Column mapping**: [`ColumnMapper`] resolves raw header labels to configured aliases
//! - **Record decoding**: [`decode_table`] and [`decode_rows`] build a [`bhid_model::Document`]
//!   applying per-column defaults and the omission rule for absent cells
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bhid_ingest::{SourceOptions, decode_rows, read_table};
//!
//! let table = read_table(Path::new("registrations.csv"), &SourceOptions::default())?;
//! let document = decode_rows("registrations", &schema.columns, &table.header, &table.rows);
//! ```

mod csv;
mod decoder;
mod error;
#[cfg(feature = "excel")]
mod excel;
mod mapper;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Raw Tables ===
pub use crate::csv::{CsvOptions, read_csv_reader, read_csv_table};
#[cfg(feature = "excel")]
pub use excel::read_excel_table;
pub use source::{RawTable, SourceFormat, SourceOptions, read_table};

// === Decoding ===
pub use decoder::{decode_rows, decode_table};
pub use mapper::ColumnMapper;
