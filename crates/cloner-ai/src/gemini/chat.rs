//! Stateful Gemini chat: keeps the provider-facing `contents` list.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::{AiError, AiResponse, ChatHandle, ImageAttachment};

use super::client::GeminiClient;

/// A chat whose history lives inside the handle.
///
/// A turn is committed to history only after the API answers, so a failed
/// send leaves the conversation exactly as it was.
pub struct GeminiChat {
    client: GeminiClient,
    contents: Vec<Value>,
}

impl GeminiChat {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            contents: Vec::new(),
        }
    }
}

/// Build a `user` content entry: text first, then the inline image.
pub(crate) fn user_content(input: &str, image: Option<&ImageAttachment>) -> Result<Value, AiError> {
    let mut parts = vec![json!({ "text": input })];
    if let Some(img) = image {
        parts.push(json!({
            "inlineData": {
                "mimeType": img.mime_type()?,
                "data": img.to_base64(),
            }
        }));
    }
    Ok(json!({ "role": "user", "parts": parts }))
}

pub(crate) fn model_content(text: &str) -> Value {
    json!({ "role": "model", "parts": [{ "text": text }] })
}

#[async_trait]
impl ChatHandle for GeminiChat {
    async fn send(
        &mut self,
        input: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<AiResponse, AiError> {
        let turn = user_content(input, image)?;

        let mut request = Vec::with_capacity(self.contents.len() + 1);
        request.extend_from_slice(&self.contents);
        request.push(turn.clone());

        let response = self.client.generate_content(&request).await?;

        self.contents.push(turn);
        self.contents.push(model_content(&response.content));
        debug!(
            model = %self.client.model(),
            history = self.contents.len(),
            "Gemini turn committed"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_content_text_only() {
        let v = user_content("hello", None).unwrap();
        assert_eq!(v["role"], "user");
        assert_eq!(v["parts"].as_array().unwrap().len(), 1);
        assert_eq!(v["parts"][0]["text"], "hello");
    }

    #[test]
    fn user_content_with_image_appends_inline_data() {
        let img = ImageAttachment::from_bytes("s.jpg", vec![0xFF, 0xD8, 0xFF, 0x01]);
        let v = user_content("clone this", Some(&img)).unwrap();
        assert_eq!(v["parts"][0]["text"], "clone this");
        assert_eq!(v["parts"][1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(v["parts"][1]["inlineData"]["data"], img.to_base64());
    }

    #[test]
    fn user_content_rejects_corrupt_image() {
        let img = ImageAttachment::from_bytes("s.png", b"nope".to_vec());
        let err = user_content("x", Some(&img)).unwrap_err();
        assert!(matches!(err, AiError::InvalidImage(_)));
    }

    #[test]
    fn model_content_uses_model_role() {
        let v = model_content("done");
        assert_eq!(v["role"], "model");
        assert_eq!(v["parts"][0]["text"], "done");
    }

    #[tokio::test]
    async fn failed_send_leaves_history_untouched() {
        use crate::gemini::GeminiConfig;
        use cloner_common::ApiKey;

        let config = GeminiConfig::new(ApiKey::new("k").unwrap(), "gemini-1.5-flash");
        // Nothing listens on the loopback discard port, so the connection is refused.
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = GeminiClient::new(config, http)
            .with_base_url("http://127.0.0.1:9/models");
        let mut chat = GeminiChat::new(client);

        let result = chat.send("hi", None).await;
        assert!(matches!(result, Err(AiError::Transport(_))));
        assert!(chat.contents.is_empty());
    }
}
