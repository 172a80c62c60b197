//! Run configuration.
//!
//! A run is described by one TOML file naming the input document (and an
//! optional linked second document), per-column validation rules, the hash
//! categories, the salt, and the destination. [`load_config`] parses the file,
//! resolves relative paths against its directory, and checks it with
//! [`Config::validate`], which also builds every validator so that bad rule
//! options fail before any data is read.

mod error;
mod model;
mod salt;

use std::path::Path;

pub use error::{ConfigError, Result};
pub use model::{
    AlgorithmConfig, Config, DestinationConfig, SaltConfig, SourceConfig, ValidationConfig,
};
pub use salt::load_salt;

/// Reads, resolves, and validates a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = Config::from_toml_str(&contents, base_dir).map_err(|err| match err {
        ConfigError::Toml { source, .. } => ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    config.validate()?;
    tracing::debug!(
        path = %path.display(),
        source = %config.source.path.display(),
        linked = config.linked_source.is_some(),
        rule_columns = config.rules.len(),
        "Loaded configuration"
    );
    Ok(config)
}
