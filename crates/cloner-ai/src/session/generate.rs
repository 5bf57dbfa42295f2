//! Async generation for ConversationSession.

use tracing::{debug, warn};

use crate::{AiError, ImageAttachment, SessionError};

use super::manager::ConversationSession;
use super::types::TurnGuard;

impl ConversationSession {
    /// Send `input` (and `image`, when present) as the next turn and return
    /// the generated text.
    ///
    /// Opens the chat handle on first use. History is kept by the handle;
    /// nothing is re-sent from here. Every failure, including a failure to
    /// open the handle, comes back as `SessionError::Generation`.
    pub async fn generate(
        &mut self,
        input: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, SessionError> {
        let _turn = TurnGuard::try_begin(&self.busy).ok_or(AiError::Busy)?;

        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                debug!(session = self.id.short(), model = %self.model_id, "Opening chat handle");
                self.backend
                    .start_chat(&self.credential, &self.model_id, &self.system_instruction)?
            }
        };
        let handle = self.handle.insert(handle);

        match handle.send(input, image).await {
            Ok(response) => {
                self.turns += 1;
                debug!(
                    session = self.id.short(),
                    turn = self.turns,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Generation complete"
                );
                Ok(response.content)
            }
            Err(e) => {
                warn!(session = self.id.short(), error = %e, "Generation failed");
                Err(e.into())
            }
        }
    }
}
