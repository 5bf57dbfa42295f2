//! Terminal rendering of conversation entries.
//!
//! Code payloads are framed and labelled so they can be told apart from
//! prose at a glance and copied without the frame.

use cloner_ai::{Message, Role};
use cloner_chat::{classify, ClassifiedResponse};

const CODE_OPEN: &str = "----- liquid -----";
const CODE_CLOSE: &str = "------------------";

/// Render a freshly classified reply.
pub(crate) fn reply(response: &ClassifiedResponse) -> String {
    if response.is_code() {
        let body = response.payload.trim_matches('\n');
        format!("{CODE_OPEN}\n{body}\n{CODE_CLOSE}")
    } else {
        response.payload.clone()
    }
}

/// Render a history entry, re-deriving the classification of assistant text.
pub(crate) fn message(msg: &Message) -> String {
    match msg.role {
        Role::User => format!("you> {}", msg.content),
        Role::Assistant => format!("gemini>\n{}", reply(&classify(&msg.content))),
    }
}
