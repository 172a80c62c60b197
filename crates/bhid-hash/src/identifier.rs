//! Per-record identifier derivation.

use std::fmt;

use bhid_model::{AlgorithmColumns, Document, HashCategory, Record};

use crate::assemble::{clean_value_list, extract_algo_columns, join_fields_for_hash};
use crate::error::{HashError, Result};
use crate::hasher::{FieldHasher, HasherFactory, Salt};

/// Runs extract, clean, concatenate, and hash for each record.
pub struct IdentifierBuilder {
    columns: AlgorithmColumns,
    order: Vec<HashCategory>,
    hasher: Box<dyn FieldHasher>,
}

impl IdentifierBuilder {
    pub fn new(columns: AlgorithmColumns, hasher: Box<dyn FieldHasher>) -> Self {
        Self {
            columns,
            order: HashCategory::DEFAULT_ORDER.to_vec(),
            hasher,
        }
    }

    pub fn from_factory(columns: AlgorithmColumns, salt: &Salt, factory: &HasherFactory) -> Self {
        Self::new(columns, factory(salt))
    }

    /// Sets the category concatenation order. Omitted categories are left out of the hash.
    pub fn with_order(mut self, order: &[HashCategory]) -> Result<Self> {
        for (idx, category) in order.iter().enumerate() {
            if order[..idx].contains(category) {
                return Err(HashError::DuplicateCategory {
                    category: category.label(),
                });
            }
        }
        self.order = order.to_vec();
        Ok(self)
    }

    pub fn columns(&self) -> &AlgorithmColumns {
        &self.columns
    }

    pub fn order(&self) -> &[HashCategory] {
        &self.order
    }

    /// The concatenated, unhashed input for one record.
    pub fn hash_input(&self, record: &Record) -> String {
        let cleaned = extract_algo_columns(&self.columns, record)
            .map(|values| clean_value_list(values.iter().map(Some)));
        join_fields_for_hash(&cleaned.into_ordered(&self.order))
    }

    pub fn identify(&self, record: &Record) -> String {
        self.hasher.hash(&self.hash_input(record))
    }

    /// Identifiers for every record, in document order.
    pub fn identify_document(&self, document: &Document) -> Vec<String> {
        let ids: Vec<String> = document.data.iter().map(|r| self.identify(r)).collect();
        tracing::info!(document = %document.name, records = ids.len(), "Derived identifiers");
        ids
    }
}

impl fmt::Debug for IdentifierBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierBuilder")
            .field("columns", &self.columns)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
