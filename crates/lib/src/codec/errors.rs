//! Error types for format adapters.

use thiserror::Error;

use super::ContentType;

/// Structured error types for decoding and encoding documents.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// No codec is available for the content type
    #[error("Unsupported content type: {content_type}")]
    Unsupported { content_type: String },

    /// Input could not be parsed
    #[error("Failed to decode {content_type}: {reason}")]
    Decode {
        content_type: ContentType,
        reason: String,
    },

    /// A node could not be written in the target format
    #[error("Failed to encode {content_type}: {reason}")]
    Encode {
        content_type: ContentType,
        reason: String,
    },
}

impl CodecError {
    /// Check if the content type has no bundled codec
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CodecError::Unsupported { .. })
    }

    /// Check if this error came from parsing input
    pub fn is_decode_error(&self) -> bool {
        matches!(self, CodecError::Decode { .. })
    }

    /// Check if this error came from producing output
    pub fn is_encode_error(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }
}

impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
