use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted upload, 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Declared metadata of a candidate file, as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub max_bytes: u64,
    pub accepted_prefix: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_prefix: "image/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported file type {mime_type:?}")]
    InvalidType { mime_type: String },
    #[error("file is {size} bytes, limit is {max_bytes}")]
    TooLarge { size: u64, max_bytes: u64 },
    #[error("failed to read file: {0}")]
    ReadFailure(String),
}

impl UploadError {
    /// Text shown to the visitor for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::InvalidType { .. } => "Please select an image file",
            UploadError::TooLarge { .. } => "Image size should be less than 5MB",
            UploadError::ReadFailure(_) => "Error uploading image",
        }
    }
}

/// Type check first, then size. The first failing check wins.
pub fn validate(file: &FileMeta, limits: &UploadLimits) -> Result<(), UploadError> {
    if !file.mime_type.starts_with(&limits.accepted_prefix) {
        return Err(UploadError::InvalidType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size > limits.max_bytes {
        return Err(UploadError::TooLarge {
            size: file.size,
            max_bytes: limits.max_bytes,
        });
    }
    Ok(())
}
