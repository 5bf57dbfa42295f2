//! `ChatBackend` implementation that opens Gemini chats.

use cloner_common::ApiKey;
use tracing::info;

use crate::{AiError, ChatBackend, ChatHandle};

use super::chat::GeminiChat;
use super::client::{GeminiClient, GEMINI_API_BASE};
use super::config::{GeminiConfig, GenerationSettings};

/// Opens Gemini chats that share one HTTP connection pool.
pub struct GeminiBackend {
    http: reqwest::Client,
    settings: GenerationSettings,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(settings: GenerationSettings) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| AiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            settings,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }
}

impl ChatBackend for GeminiBackend {
    fn start_chat(
        &self,
        credential: &ApiKey,
        model_id: &str,
        system_instruction: &str,
    ) -> Result<Box<dyn ChatHandle>, AiError> {
        let config = GeminiConfig::new(credential.clone(), model_id)
            .with_system_instruction(system_instruction)
            .with_settings(&self.settings);

        info!(model = model_id, "Starting Gemini chat");

        let client =
            GeminiClient::new(config, self.http.clone()).with_base_url(self.base_url.clone());
        Ok(Box::new(GeminiChat::new(client)))
    }
}
