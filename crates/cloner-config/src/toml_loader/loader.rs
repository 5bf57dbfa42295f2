//! Reading and parsing config files.

use std::io::ErrorKind;
use std::path::Path;

use cloner_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::ClonerConfig;
use crate::validation;

/// Parse TOML text; fields left out take their defaults.
pub fn parse_config(content: &str) -> Result<ClonerConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load the config at `path`.
///
/// A missing file is `FileNotFound`. Out-of-range values only warn here;
/// `load_config` is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<ClonerConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse_config(&content)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}");
    }

    info!(path = %path.display(), model = %config.api.model, "Config loaded");
    Ok(config)
}

/// Load the config at the platform default path, writing the template there
/// first if nothing exists yet.
pub fn load_default() -> Result<ClonerConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(ClonerConfig::default())
        }
        other => other,
    }
}
