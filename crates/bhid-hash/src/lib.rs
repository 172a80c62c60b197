//! Identifier derivation for beneficiary records.
//!
//! The pipeline has three steps:
//!
//! 1. [`reconcile`] merges the declared required fields with two document schemas,
//!    adding the aliases of any column shared by both documents (the join key).
//! 2. [`extract_algo_columns`], [`clean_value_list`], and [`join_fields_for_hash`]
//!    turn a record into one hash input string. Only text contributes; numbers and
//!    missing cells become empty strings.
//! 3. A [`FieldHasher`] built from a [`Salt`] turns that string into the identifier.
//!
//! [`IdentifierBuilder`] runs steps 2 and 3 for every record of a document.

mod assemble;
mod error;
mod hasher;
mod identifier;
mod reconcile;

pub use assemble::{clean_value_list, extract_algo_columns, join_fields_for_hash};
pub use error::{HashError, Result};
pub use hasher::{FieldHasher, HasherFactory, Salt, Sha256Hasher, sha256_factory, sha256_hex};
pub use identifier::IdentifierBuilder;
pub use reconcile::{SharedColumnPolicy, reconcile, reconcile_with_policy, shared_column_names};
