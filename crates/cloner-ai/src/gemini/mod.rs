//! Google Gemini API client.
//!
//! Implements the `ChatBackend` seam for Gemini models via the
//! Generative Language API.

mod api;
mod backend;
mod chat;
mod client;
mod config;

pub use backend::GeminiBackend;
pub use chat::GeminiChat;
pub use client::GeminiClient;
pub use config::{GeminiConfig, GenerationSettings};
