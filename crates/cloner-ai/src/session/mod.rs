//! Conversation session management.
//!
//! A `ConversationSession` binds one model and system instruction to a
//! lazily opened chat handle, and serializes turns through it.

mod generate;
mod manager;
mod types;


pub use manager::ConversationSession;
