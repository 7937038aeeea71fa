//! JSON codec backed by `serde_json`.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::value::RawValue;
use tracing::debug;

use super::{CodecError, ContentType, Decoder, Encoder};
use crate::node::{Mapping, Node, Scalar, Sequence};

/// Reads and writes JSON.
///
/// Object member order is kept in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
    preserve_numbers: bool,
}

impl JsonCodec {
    /// A codec that writes indented output.
    pub fn pretty() -> Self {
        JsonCodec {
            pretty: true,
            ..Default::default()
        }
    }

    /// Keep numbers as [`Scalar::Number`] holding the source text instead of
    /// narrowing them.
    ///
    /// Every digit survives, for integers beyond `u64` and long fractions
    /// alike, and encoding writes the same text back as a JSON number.
    pub fn preserve_numbers(mut self, enabled: bool) -> Self {
        self.preserve_numbers = enabled;
        self
    }

    fn decode_error(err: serde_json::Error) -> CodecError {
        debug!(error = %err, "JSON decode failed");
        CodecError::Decode {
            content_type: ContentType::Json,
            reason: err.to_string(),
        }
    }
}

impl Decoder for JsonCodec {
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    fn decode(&self, input: &[u8]) -> Result<Node, CodecError> {
        if self.preserve_numbers {
            serde_json::from_slice::<ExactNode>(input)
                .map(|exact| exact.0)
                .map_err(Self::decode_error)
        } else {
            serde_json::from_slice(input).map_err(Self::decode_error)
        }
    }
}

impl Encoder for JsonCodec {
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    fn encode(&self, node: &Node) -> Result<Vec<u8>, CodecError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(node)
        } else {
            serde_json::to_vec(node)
        };
        encoded.map_err(|err| CodecError::Encode {
            content_type: ContentType::Json,
            reason: err.to_string(),
        })
    }
}

/// A node decoded with every number kept as its source text.
///
/// Each value is captured raw first. Numbers keep that text; containers are
/// parsed again one level down.
struct ExactNode(Node);

impl<'de> Deserialize<'de> for ExactNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        let node = match text.as_bytes().first() {
            Some(b'-' | b'0'..=b'9') => Node::Scalar(Scalar::Number(text.to_string())),
            Some(b'{' | b'[') => serde_json::from_str::<ExactContainer>(text)
                .map(|container| container.0)
                .map_err(de::Error::custom)?,
            _ => serde_json::from_str::<Node>(text).map_err(de::Error::custom)?,
        };
        Ok(ExactNode(node))
    }
}

/// An object or array whose members are [`ExactNode`]s.
struct ExactContainer(Node);

impl<'de> Deserialize<'de> for ExactContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ExactContainerVisitor)
    }
}

struct ExactContainerVisitor;

impl<'de> Visitor<'de> for ExactContainerVisitor {
    type Value = ExactContainer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object or array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Sequence::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(ExactNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(ExactContainer(Node::Sequence(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Mapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, ExactNode(value))) = map.next_entry::<String, ExactNode>()? {
            entries.insert(key, value);
        }
        Ok(ExactContainer(Node::Mapping(entries)))
    }
}
