//! Salt loading.

use std::path::Path;

use bhid_hash::Salt;

use crate::error::{ConfigError, Result};
use crate::model::SaltConfig;

/// Loads the salt from its file or inline value.
///
/// File contents lose trailing whitespace (including the final newline). Relative
/// paths are resolved against `base_dir`.
pub fn load_salt(config: &SaltConfig, base_dir: &Path) -> Result<Salt> {
    let (value, origin) = match (&config.path, &config.value) {
        (Some(path), _) => {
            let path = base_dir.join(path);
            let contents =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
            (contents.trim_end().to_string(), path.display().to_string())
        }
        (None, Some(value)) => (value.clone(), "inline value".to_string()),
        (None, None) => return Err(ConfigError::invalid("[salt] needs a path or a value")),
    };
    let salt = Salt::new(value, config.region.clone())
        .map_err(|_| ConfigError::EmptySalt { origin: origin.clone() })?;
    tracing::debug!(origin = %origin, region = ?salt.region(), "Loaded salt");
    Ok(salt)
}
