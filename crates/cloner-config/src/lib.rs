//! Section cloner configuration system.
//!
//! TOML-based configuration with validation and environment overrides.
//! All sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = cloner_config::load_config(None).expect("failed to load config");
//! println!("model: {}", config.api.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ClonerConfig, LogLevel, ModelChoice};

use std::path::Path;

use cloner_common::{ApiKey, ConfigError};

/// Load config from `path` when given, otherwise from the platform default
/// path (created on first run), then validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ClonerConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Resolve the API credential: `GEMINI_API_KEY` first, then `[api] api_key`.
pub fn resolve_credential(config: &ClonerConfig) -> Option<ApiKey> {
    ApiKey::from_env().or_else(|| config.api.api_key.clone().and_then(ApiKey::new))
}

/// Serialize a config to pretty-printed JSON with the key redacted.
///
/// Backs the REPL's `/config` command.
pub fn config_to_json(config: &ClonerConfig) -> String {
    let mut redacted = config.clone();
    if redacted.api.api_key.is_some() {
        redacted.api.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
