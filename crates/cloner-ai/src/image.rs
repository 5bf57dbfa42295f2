//! Reference image attached to a turn.
//!
//! The attachment is carried opaquely: bytes are only sniffed for a MIME type
//! when a request is built, so a corrupt upload fails the turn it is sent with
//! rather than the command that attached it.

use std::path::{Path, PathBuf};

use base64::Engine;

use cloner_common::IMAGE_EXTENSIONS;

use crate::AiError;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("unsupported image type '{0}' (expected jpg, jpeg or png)")]
    UnsupportedExtension(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageAttachment {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an attachment from disk. Only the extension is checked here.
    pub fn load(path: &Path) -> Result<Self, ImageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImageError::UnsupportedExtension(ext));
        }

        let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type detected from the file signature.
    pub fn mime_type(&self) -> Result<&'static str, AiError> {
        if self.bytes.starts_with(PNG_SIGNATURE) {
            Ok("image/png")
        } else if self.bytes.starts_with(JPEG_SIGNATURE) {
            Ok("image/jpeg")
        } else {
            Err(AiError::InvalidImage(format!(
                "cannot identify image file '{}'",
                self.file_name
            )))
        }
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}
