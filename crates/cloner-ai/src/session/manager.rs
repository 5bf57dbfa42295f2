//! ConversationSession struct and lifecycle.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use cloner_common::{ApiKey, ConfigError, ConversationId};
use tracing::debug;

use crate::{ChatBackend, ChatHandle, SessionError};

/// A conversation bound to one model and one system instruction.
///
/// Both are fixed at creation; switching either means dropping the session
/// and creating a new one. The chat handle is opened on the first
/// `generate` call and owned exclusively by the session.
pub struct ConversationSession {
    pub(super) id: ConversationId,
    pub(super) model_id: String,
    pub(super) system_instruction: String,
    pub(super) credential: ApiKey,
    pub(super) backend: Arc<dyn ChatBackend>,
    /// Provider-side chat, opened lazily.
    pub(super) handle: Option<Box<dyn ChatHandle>>,
    /// Successful exchanges so far.
    pub(super) turns: u64,
    /// Whether a turn is in flight.
    pub(super) busy: AtomicBool,
}

impl ConversationSession {
    /// Create a session. Fails when no credential is supplied; the service
    /// is not contacted.
    pub fn create(
        backend: Arc<dyn ChatBackend>,
        credential: Option<ApiKey>,
        model_id: impl Into<String>,
        system_instruction: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let credential = credential.ok_or(ConfigError::MissingCredential)?;
        let session = Self {
            id: ConversationId::new(),
            model_id: model_id.into(),
            system_instruction: system_instruction.into(),
            credential,
            backend,
            handle: None,
            turns: 0,
            busy: AtomicBool::new(false),
        };
        debug!(session = session.id.short(), model = %session.model_id, "Session created");
        Ok(session)
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Whether the provider-side chat has been opened yet.
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("id", &self.id)
            .field("model_id", &self.model_id)
            .field("has_handle", &self.handle.is_some())
            .field("turns", &self.turns)
            .finish_non_exhaustive()
    }
}
