//! Generation API settings: credential, model choice, and HTTP limits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hosted model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "gemini-1.5-flash")]
    Flash,
    #[serde(rename = "gemini-1.5-pro")]
    Pro,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::Flash, ModelChoice::Pro];

    /// Model identifier as the API expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelChoice::Flash => "gemini-1.5-flash",
            ModelChoice::Pro => "gemini-1.5-pro",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown model '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// `[api]` section.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Gemini API key. `GEMINI_API_KEY` takes precedence when set.
    pub api_key: Option<String>,
    pub model: ModelChoice,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-600.
    pub request_timeout_secs: u32,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: ModelChoice::Flash,
            max_output_tokens: 8192,
            temperature: 0.7,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
