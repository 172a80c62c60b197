//! Salted hashing of assembled hash inputs.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{HashError, Result};

/// Turns a concatenated hash input into an identifier.
pub trait FieldHasher: Send + Sync {
    fn hash(&self, input: &str) -> String;
}

/// Builds a hasher for a salt.
pub type HasherFactory = Box<dyn Fn(&Salt) -> Box<dyn FieldHasher> + Send + Sync>;

/// Secret salt and optional region tag mixed into every digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt {
    value: String,
    region: Option<String>,
}

impl Salt {
    pub fn new(value: impl Into<String>, region: Option<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(HashError::EmptySalt);
        }
        Ok(Self {
            value,
            region: region.filter(|r| !r.is_empty()),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salt")
            .field("value", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Lowercase hex SHA-256 of `salt || region || input`.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    salt: Salt,
}

impl Sha256Hasher {
    pub fn new(salt: Salt) -> Self {
        Self { salt }
    }
}

impl FieldHasher for Sha256Hasher {
    fn hash(&self, input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.value.as_bytes());
        if let Some(region) = &self.salt.region {
            hasher.update(region.as_bytes());
        }
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Factory producing [`Sha256Hasher`]s.
pub fn sha256_factory() -> HasherFactory {
    Box::new(|salt: &Salt| Box::new(Sha256Hasher::new(salt.clone())) as Box<dyn FieldHasher>)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(sha256_hex(b"abc"), ABC);
    }

    #[test]
    fn test_salt_is_prefixed() {
        let hasher = Sha256Hasher::new(Salt::new("a", None).unwrap());
        assert_eq!(hasher.hash("bc"), ABC);
    }

    #[test]
    fn test_region_follows_salt() {
        let hasher = Sha256Hasher::new(Salt::new("a", Some("b".to_string())).unwrap());
        assert_eq!(hasher.hash("c"), ABC);
    }

    #[test]
    fn test_empty_salt_rejected() {
        assert!(matches!(Salt::new("", None), Err(HashError::EmptySalt)));
    }

    #[test]
    fn test_debug_redacts_salt() {
        let salt = Salt::new("top-secret", Some("IRQ".to_string())).unwrap();
        let debug = format!("{salt:?}");
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("IRQ"));
    }

    #[test]
    fn test_factory_uses_salt() {
        let factory = sha256_factory();
        let a = factory(&Salt::new("one", None).unwrap());
        let b = factory(&Salt::new("two", None).unwrap());
        assert_ne!(a.hash("x"), b.hash("x"));
        assert_eq!(a.hash("x").len(), 64);
    }
}
