//! Where the config file lives, and writing it on first run.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use cloner_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "cloner";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/cloner/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns `true` when the template was written. An existing file is never
/// touched.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "Config already present, not overwriting");
            return Ok(false);
        }
        Err(e) => return Err(write_error(path)(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error(path))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(true)
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    }
}
