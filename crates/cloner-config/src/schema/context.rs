//! Reference context attached to every turn.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `[context]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContextConfig {
    /// Settings screenshot (jpg, jpeg or png) sent alongside each message.
    pub image: Option<PathBuf>,
}
