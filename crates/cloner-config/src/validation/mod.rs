//! Full configuration validation.
//!
//! Validates numeric ranges and the context image path. Each section has
//! its own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod api;
mod context;
mod helpers;


use crate::schema::ClonerConfig;
use cloner_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ClonerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    context::validate_context(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
