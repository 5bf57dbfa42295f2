//! Turn submission.

use cloner_ai::{ConversationSession, ImageAttachment, Message, SessionError};
use tracing::{debug, warn};

use crate::classify::classify;

use super::{ChatController, TurnOutcome, CREDENTIAL_ADVISORY};

impl ChatController {
    /// Record `input`, ask the model, and record its answer.
    ///
    /// `image` is forwarded with this turn; callers that keep an attachment
    /// pass it again on every turn. History always stores the raw model
    /// text; the stripped payload in `TurnOutcome::Reply` is for immediate
    /// rendering only.
    pub async fn submit_turn(
        &mut self,
        input: &str,
        image: Option<&ImageAttachment>,
    ) -> TurnOutcome {
        if input.trim().is_empty() {
            return TurnOutcome::Ignored;
        }

        self.history.push(Message::user(input));

        let Some(credential) = self.credential.clone() else {
            debug!("No credential configured, skipping generation");
            self.history.push(Message::assistant(CREDENTIAL_ADVISORY));
            return TurnOutcome::Advisory;
        };

        let session = match self.session.take() {
            Some(session) => session,
            None => match ConversationSession::create(
                self.backend.clone(),
                Some(credential),
                self.model.clone(),
                self.system_instruction.clone(),
            ) {
                Ok(session) => session,
                Err(SessionError::Config(e)) => {
                    warn!("Session not created: {e}");
                    self.history.push(Message::assistant(CREDENTIAL_ADVISORY));
                    return TurnOutcome::Advisory;
                }
                Err(SessionError::Generation { reason }) => return self.record_failure(reason),
            },
        };
        let session = self.session.insert(session);
        let result = session.generate(input, image).await;

        match result {
            Ok(raw) => {
                let classified = classify(&raw);
                debug!(kind = ?classified.kind, chars = raw.len(), "Turn complete");
                self.history.push(Message::assistant(raw));
                TurnOutcome::Reply(classified)
            }
            Err(SessionError::Generation { reason }) => self.record_failure(reason),
            Err(SessionError::Config(e)) => self.record_failure(e.to_string()),
        }
    }

    fn record_failure(&mut self, reason: String) -> TurnOutcome {
        self.history
            .push(Message::assistant(format!("Error: {reason}")));
        TurnOutcome::Failed { reason }
    }
}
