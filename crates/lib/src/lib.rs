//!
//! pathdoc: schema-free documents addressed by string paths.
//!
//! Load JSON (or any serde format), then read and write deep inside it with
//! paths such as `"users.list.1.score"`.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The dynamic value tree. Every node is a scalar, an ordered sequence, or a mapping with insertion-ordered string keys.
//! * **Patterns (`path::Pattern`)**: A path split on a configurable separator byte. All-digit segments address sequence indices; the separator alone addresses the whole document.
//! * **Resolution (`path::resolve`)**: Strict lookup splits on every separator. The violence check additionally finds keys that themselves contain the separator, preferring the longest literal key.
//! * **Mutation (`path::mutate`)**: Writes create missing containers, pad sequences with nulls, and replace nodes of the wrong kind. Failed writes leave the tree untouched.
//! * **Documents (`Document`)**: A tree plus its `Options`. `SharedDocument` is the thread-safe variant behind a reader/writer lock.
//! * **Codecs (`codec`)**: `Decoder`/`Encoder` traits for moving between bytes and trees, with a bundled JSON codec.
//!
//! ```rust
//! use pathdoc::Document;
//!
//! let mut doc = Document::from_json(r#"{"name": "gf", "tags": ["a"]}"#)?;
//! doc.append("tags", "b")?;
//! doc.set("owner.id", 7)?;
//! doc.remove("name")?;
//!
//! assert_eq!(doc.to_json_string()?, r#"{"tags":["a","b"],"owner":{"id":7}}"#);
//! # Ok::<(), pathdoc::Error>(())
//! ```

pub mod codec;
pub mod document;
pub mod node;
pub mod path;

pub use document::{Document, Options, SharedDocument};
pub use node::{Node, NodeMut, Scalar};

/// Result type used throughout the pathdoc library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathdoc library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured format errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Codec(_) => "codec",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error rejected the path itself.
    pub fn is_invalid_pattern(&self) -> bool {
        match self {
            Error::Path(path_err) => path_err.is_invalid_pattern(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Path(path_err) => path_err.is_type_conversion() || path_err.is_not_appendable(),
            Error::Serialize(json_err) => json_err.is_data(),
            _ => false,
        }
    }

    /// Check if this error is an index range failure.
    pub fn is_index_overflow(&self) -> bool {
        match self {
            Error::Path(path_err) => path_err.is_index_overflow(),
            _ => false,
        }
    }

    /// Check if this error came from decoding or encoding.
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if no codec exists for the requested content type.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_unsupported(),
            _ => false,
        }
    }
}
