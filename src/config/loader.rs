//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::HealthConfig;
use crate::config::validation::validate_config;
use crate::error::Error;

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HealthConfig, Error> {
    let content = fs::read_to_string(path)?;
    let config: HealthConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(|errors| Error::Validation(errors.join(", ")))?;

    Ok(config)
}
