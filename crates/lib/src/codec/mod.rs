//! Format adapters between raw bytes and [`Node`] trees.
//!
//! A [`Decoder`] turns input bytes into a tree made only of mappings,
//! sequences and scalars; an [`Encoder`] writes a tree back out. Only JSON
//! ships with a codec ([`JsonCodec`]). Because [`Node`] implements serde's
//! `Serialize` and `Deserialize`, any serde data format crate can be wrapped
//! in a few lines to serve the other [`ContentType`]s.
//!
//! ```rust
//! use pathdoc::codec::{Decoder, Encoder, JsonCodec};
//!
//! let codec = JsonCodec::default();
//! let node = codec.decode(br#"{"a": [1, 2]}"#)?;
//! assert_eq!(codec.encode(&node)?, br#"{"a":[1,2]}"#.to_vec());
//! # Ok::<(), pathdoc::codec::CodecError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::Node;

mod errors;
mod json;

pub use errors::CodecError;
pub use json::JsonCodec;

/// Data formats a document can be loaded from or saved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Json,
    Xml,
    Ini,
    Yaml,
    Toml,
    Properties,
}

impl ContentType {
    /// All known content types.
    pub const ALL: [ContentType; 6] = [
        ContentType::Json,
        ContentType::Xml,
        ContentType::Ini,
        ContentType::Yaml,
        ContentType::Toml,
        ContentType::Properties,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "json",
            ContentType::Xml => "xml",
            ContentType::Ini => "ini",
            ContentType::Yaml => "yaml",
            ContentType::Toml => "toml",
            ContentType::Properties => "properties",
        }
    }

    /// Looks up a content type by file extension or path.
    ///
    /// ```rust
    /// # use pathdoc::codec::ContentType;
    /// assert_eq!(ContentType::from_extension("config.yml"), Some(ContentType::Yaml));
    /// assert_eq!(ContentType::from_extension("app.JS"), Some(ContentType::Json));
    /// assert_eq!(ContentType::from_extension("notes.txt"), None);
    /// ```
    pub fn from_extension(path: &str) -> Option<Self> {
        let extension = path.rsplit('.').next().unwrap_or(path);
        extension.parse().ok()
    }

    /// Guesses the content type of raw input from its first significant byte.
    ///
    /// Only JSON and XML are recognisable this way.
    pub fn sniff(input: &[u8]) -> Option<Self> {
        match input.iter().find(|b| !b.is_ascii_whitespace())? {
            b'{' | b'[' | b'"' => Some(ContentType::Json),
            b'<' => Some(ContentType::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "js" => Ok(ContentType::Json),
            "xml" => Ok(ContentType::Xml),
            "ini" => Ok(ContentType::Ini),
            "yaml" | "yml" => Ok(ContentType::Yaml),
            "toml" => Ok(ContentType::Toml),
            "properties" => Ok(ContentType::Properties),
            _ => Err(CodecError::Unsupported {
                content_type: s.to_string(),
            }),
        }
    }
}

/// Parses raw bytes into a node tree.
pub trait Decoder {
    /// The format this decoder reads
    fn content_type(&self) -> ContentType;

    /// Decodes `input` into a tree of mappings, sequences and scalars.
    fn decode(&self, input: &[u8]) -> Result<Node, CodecError>;
}

/// Writes a node tree as raw bytes.
pub trait Encoder {
    /// The format this encoder writes
    fn content_type(&self) -> ContentType;

    fn encode(&self, node: &Node) -> Result<Vec<u8>, CodecError>;
}

/// Decodes `input` with the bundled codec for `content_type`.
///
/// # Errors
///
/// [`CodecError::Unsupported`] for content types without a bundled codec,
/// [`CodecError::Decode`] for malformed input.
pub fn decode(
    content_type: ContentType,
    input: &[u8],
    preserve_numbers: bool,
) -> Result<Node, CodecError> {
    match content_type {
        ContentType::Json => JsonCodec::default()
            .preserve_numbers(preserve_numbers)
            .decode(input),
        other => Err(CodecError::Unsupported {
            content_type: other.to_string(),
        }),
    }
}

/// Encodes `node` with the bundled codec for `content_type`.
///
/// # Errors
///
/// [`CodecError::Unsupported`] for content types without a bundled codec.
pub fn encode(content_type: ContentType, node: &Node) -> Result<Vec<u8>, CodecError> {
    match content_type {
        ContentType::Json => JsonCodec::default().encode(node),
        other => Err(CodecError::Unsupported {
            content_type: other.to_string(),
        }),
    }
}
