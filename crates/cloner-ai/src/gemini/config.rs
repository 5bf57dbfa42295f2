//! Gemini API client configuration.

use std::time::Duration;

use cloner_common::ApiKey;

/// Generation and transport limits shared by every chat a backend opens.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: 8192,
            temperature: 0.7,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl GenerationSettings {
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

/// Configuration of one Gemini chat.
///
/// `Debug` comes from `ApiKey`, which redacts the secret.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub system_instruction: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl GeminiConfig {
    pub fn new(api_key: ApiKey, model: impl Into<String>) -> Self {
        let defaults = GenerationSettings::default();
        Self {
            api_key,
            model: model.into(),
            system_instruction: String::new(),
            max_output_tokens: defaults.max_output_tokens,
            temperature: defaults.temperature,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_settings(mut self, settings: &GenerationSettings) -> Self {
        self.max_output_tokens = settings.max_output_tokens;
        self.temperature = settings.temperature;
        self
    }
}
