//! Generation engine for the section cloner.
//!
//! Provides:
//! - The `ChatBackend` / `ChatHandle` seam to a hosted, stateful chat API
//! - A Gemini implementation of that seam
//! - `ConversationSession`, which lazily opens one chat handle and guards it
//!   against concurrent use
//! - Image attachments forwarded alongside a turn

pub mod gemini;
pub mod image;
pub mod session;

use async_trait::async_trait;
use cloner_common::{ApiKey, ConfigError};

pub use gemini::{GeminiBackend, GeminiConfig, GenerationSettings};
pub use image::{ImageAttachment, ImageError};
pub use session::ConversationSession;

/// Opens stateful chats against a hosted model.
pub trait ChatBackend: Send + Sync {
    /// Start a new chat bound to one model and system instruction.
    ///
    /// The returned handle owns the provider-side conversation; nothing
    /// outside it can inspect or replay that history.
    fn start_chat(
        &self,
        credential: &ApiKey,
        model_id: &str,
        system_instruction: &str,
    ) -> Result<Box<dyn ChatHandle>, AiError>;
}

/// One live chat with the provider.
#[async_trait]
pub trait ChatHandle: Send {
    /// Send the next user turn (text plus optional image) and return the reply.
    async fn send(
        &mut self,
        input: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("{0}")]
    Transport(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("rate limited")]
    RateLimited,
    #[error("API error: {0}")]
    Api(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("session is busy with another request")]
    Busy,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Transport("timeout".into())
        } else {
            AiError::Transport(e.to_string())
        }
    }
}

/// Failure of a `ConversationSession` operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("generation failed: {reason}")]
    Generation { reason: String },
}

impl From<AiError> for SessionError {
    fn from(e: AiError) -> Self {
        SessionError::Generation {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
        assert_eq!(Message::user("hi").content, "hi");
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn generation_reason_is_bare_error_text() {
        let err: SessionError = AiError::Transport("timeout".into()).into();
        match err {
            SessionError::Generation { reason } => assert_eq!(reason, "timeout"),
            other => panic!("unexpected: {other:?}"),
        }

        let err: SessionError = AiError::RateLimited.into();
        assert!(matches!(
            err,
            SessionError::Generation { ref reason } if reason == "rate limited"
        ));
    }

    #[test]
    fn missing_credential_is_config_error() {
        let err: SessionError = ConfigError::MissingCredential.into();
        assert!(matches!(
            err,
            SessionError::Config(ConfigError::MissingCredential)
        ));
    }
}
