//! Configuration schema types for the section cloner.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod context;
mod logging;

pub use api::*;
pub use context::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClonerConfig {
    pub api: ApiConfig,
    pub context: ContextConfig,
    pub logging: LoggingConfig,
}
