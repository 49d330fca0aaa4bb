//! Error types for the identification engine
//!
//! Only the image path has failure modes. The chat path resolves every input
//! to either a refusal or an answer, so it has no error type.

use thiserror::Error;

use crate::identify::Category;

/// Result alias for identification operations
pub type Result<T> = std::result::Result<T, IdentifyError>;

#[derive(Error, Debug)]
pub enum IdentifyError {
    /// Image bytes could not be read or decoded
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Image file could not be read from disk
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// Decoded image has a zero dimension
    #[error("Image has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A plant pool had no members (catalog misconfiguration)
    #[error("Plant pool for {0} is empty")]
    EmptyPool(String),
}

impl IdentifyError {
    pub(crate) fn empty_pool(category: Option<Category>) -> Self {
        let label = category
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "fallback ladder".to_string());
        IdentifyError::EmptyPool(label)
    }

    /// Decode-class failures are recovered with the default pool. An empty pool
    /// is a configuration fault and is logged louder by the caller.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            IdentifyError::Decode(_) | IdentifyError::Io(_) | IdentifyError::InvalidDimensions { .. }
        )
    }
}
