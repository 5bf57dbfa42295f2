//! API credential wrapper.

use std::fmt;

/// A caller-supplied API key.
///
/// The secret is only reachable through [`ApiKey::expose`]; `Debug` and
/// `Display` print a redacted placeholder so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key. Returns `None` for empty or whitespace-only input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Read the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Option<Self> {
        std::env::var("GEMINI_API_KEY").ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   \n").is_none());
    }

    #[test]
    fn key_is_trimmed() {
        let key = ApiKey::new("  abc123 ").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn debug_and_display_are_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
        assert!(!key.to_string().contains("super-secret"));
    }
}
