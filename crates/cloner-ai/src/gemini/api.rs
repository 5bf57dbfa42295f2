//! HTTP call for GeminiClient.

use serde_json::Value;
use tracing::debug;

use crate::{AiError, AiResponse};

use super::client::GeminiClient;

impl GeminiClient {
    /// POST the full `contents` list to `generateContent`.
    pub async fn generate_content(&self, contents: &[Value]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(contents);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = contents.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", self.config.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Auth(format!("HTTP {status}: {text}")));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!("HTTP {status}: {text}")));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
