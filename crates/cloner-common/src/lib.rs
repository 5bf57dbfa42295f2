pub mod credential;
pub mod errors;
pub mod id;

pub use credential::ApiKey;
pub use errors::{ClonerError, ConfigError};
pub use id::ConversationId;

/// Lower-case file extensions accepted for reference screenshots.
///
/// Shared by config validation and the attachment loader.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
