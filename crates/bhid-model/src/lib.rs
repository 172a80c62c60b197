//! Data model for beneficiary identifier hashing.
//!
//! This crate holds the types shared by every stage of the pipeline:
//!
//! - **Values and records**: [`Value`], [`Record`], and [`Document`] describe decoded tabular data
//! - **Schemas**: [`ColumnDefinition`] and [`DocumentSchema`] describe how raw headers map to aliases
//! - **Hash fields**: [`RequiredFields`], [`AlgorithmColumns`], and [`HashInput`] describe which
//!   columns feed the identifier hash and in which category

mod error;
mod fields;
mod record;
mod schema;
mod value;

pub use error::{ModelError, Result};
pub use fields::{AlgorithmColumns, HashCategory, HashInput, RequiredFields};
pub use record::{Document, Record};
pub use schema::{ColumnDefinition, DocumentSchema};
pub use value::Value;
