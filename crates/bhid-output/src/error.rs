//! Error types for output writing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[cfg(feature = "excel")]
    #[error("failed to write workbook {path}: {source}")]
    Excel {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("unsupported output format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Identifier count does not match record count.
    #[error("got {ids} identifiers for {records} records")]
    LengthMismatch { records: usize, ids: usize },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
