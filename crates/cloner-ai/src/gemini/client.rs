//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::{AiError, AiResponse, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client for a single model and system instruction.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, contents: &[Value]) -> Value {
        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !self.config.system_instruction.is_empty() {
            body["systemInstruction"] = json!({
                "parts": [{ "text": self.config.system_instruction }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"].as_array().cloned().unwrap_or_default();

        let Some(first) = candidates.first() else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::Api(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::Parse("no candidates in response".to_string()));
        };

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if content.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
            return Err(AiError::Parse(format!(
                "empty response (finish reason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
