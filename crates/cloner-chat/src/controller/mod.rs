//! Chat controller: owns the conversation history and the session.
//!
//! Every non-empty turn records exactly two messages, the user's input and
//! an assistant message. The assistant message is the raw model text, the
//! credential advisory, or an `Error: ...` line; failures never escape as
//! errors.

mod turn;


use std::sync::Arc;

use cloner_ai::{ChatBackend, ConversationSession, Message};
use cloner_common::ApiKey;
use tracing::info;

use crate::classify::ClassifiedResponse;

/// Assistant reply recorded when a turn is submitted without a credential.
pub const CREDENTIAL_ADVISORY: &str = "Please provide an API credential.";

/// How a submitted turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input; nothing was recorded.
    Ignored,
    /// The model answered; payload is ready to render.
    Reply(ClassifiedResponse),
    /// No credential; the advisory was recorded instead of calling the model.
    Advisory,
    /// Generation failed; `Error: {reason}` was recorded.
    Failed { reason: String },
}

pub struct ChatController {
    backend: Arc<dyn ChatBackend>,
    credential: Option<ApiKey>,
    model: String,
    system_instruction: String,
    history: Vec<Message>,
    session: Option<ConversationSession>,
}

impl ChatController {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        credential: Option<ApiKey>,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            credential,
            model: model.into(),
            system_instruction: system_instruction.into(),
            history: Vec::new(),
            session: None,
        }
    }

    /// Messages in conversation order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// The live session, created on the first credentialed turn.
    pub fn session(&self) -> Option<&ConversationSession> {
        self.session.as_ref()
    }

    /// Set or replace the credential. A live session keeps the key it was
    /// created with until the next `clear()`.
    pub fn set_credential(&mut self, credential: Option<ApiKey>) {
        self.credential = credential;
    }

    /// Drop the history and the session, including its provider-side chat.
    pub fn clear(&mut self) {
        let dropped = self.history.len();
        self.history.clear();
        if let Some(session) = self.session.take() {
            info!(
                session = session.id().short(),
                messages = dropped,
                turns = session.turns(),
                opened = session.has_handle(),
                "Conversation cleared"
            );
        }
    }

    /// Switch models. The model is fixed per session, so this clears the
    /// conversation first.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.clear();
        self.model = model.into();
        info!(model = %self.model, "Model switched");
    }
}
