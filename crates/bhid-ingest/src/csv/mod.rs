//! CSV reading utilities.

mod reader;

pub use reader::{CsvOptions, read_csv_reader, read_csv_table};
