//! Turn orchestration and response classification for the section cloner.

pub mod classify;
pub mod controller;
pub mod prompt;

pub use classify::{classify, fence_spans, ClassifiedResponse, Kind};
pub use controller::{ChatController, TurnOutcome, CREDENTIAL_ADVISORY};
pub use prompt::SYSTEM_INSTRUCTION;
