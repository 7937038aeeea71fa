//! serde boundary for [`Node`].
//!
//! `Node` serializes untagged, the same shape `serde_json::Value` uses, so any
//! serde data format can read or write a document tree. Byte blobs go through
//! `serialize_bytes`; formats without a bytes type (JSON) render them as an
//! array of numbers.
//!
//! A [`Scalar::Number`] that fits `i64` or `u64` serializes as that integer.
//! Any other number text is handed over as a `serde_json` raw value, which
//! JSON writes verbatim.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use super::{Mapping, Node, Scalar, Sequence};

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(n) => serializer.serialize_i64(*n),
            Scalar::Uint(n) => serializer.serialize_u64(*n),
            Scalar::Float(n) => serializer.serialize_f64(*n),
            Scalar::Number(text) => serialize_number_text(text, serializer),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Bytes(b) => serde_bytes::Bytes::new(b).serialize(serializer),
        }
    }
}

fn serialize_number_text<S>(text: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Ok(n) = text.parse::<i64>() {
        return serializer.serialize_i64(n);
    }
    if let Ok(n) = text.parse::<u64>() {
        return serializer.serialize_u64(n);
    }
    // Valid JSON that starts like a number is a number
    let looks_numeric = matches!(text.as_bytes().first(), Some(b'-' | b'0'..=b'9'));
    match RawValue::from_string(text.to_string()) {
        Ok(raw) if looks_numeric => raw.serialize(serializer),
        _ => serializer.serialize_str(text),
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(scalar) => scalar.serialize(serializer),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any scalar, sequence or mapping")
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<Node, E> {
        Ok(Node::bytes(value))
    }

    fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Node, E> {
        Ok(Node::bytes(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Sequence::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Mapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            entries.insert(key, value);
        }
        Ok(Node::Mapping(entries))
    }
}

/// Converts a JSON value into a node.
///
/// With `preserve_numbers` every number becomes a [`Scalar::Number`] holding
/// the text `serde_json` prints for it, instead of being narrowed to
/// `i64`/`u64`/`f64`. A `Value` has already narrowed numbers beyond 64 bits;
/// [`JsonCodec`](crate::codec::JsonCodec) reads them exactly.
pub fn from_json_value(value: serde_json::Value, preserve_numbers: bool) -> Node {
    use serde_json::Value;

    match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::from(b),
        Value::Number(n) if preserve_numbers => Node::Scalar(Scalar::Number(n.to_string())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::from(i)
            } else if let Some(u) = n.as_u64() {
                Node::from(u)
            } else {
                n.as_f64().map_or_else(Node::null, Node::from)
            }
        }
        Value::String(s) => Node::from(s),
        Value::Array(items) => items
            .into_iter()
            .map(|item| from_json_value(item, preserve_numbers))
            .collect(),
        Value::Object(entries) => Node::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_json_value(v, preserve_numbers)))
                .collect(),
        ),
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        from_json_value(value, false)
    }
}

impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        use serde_json::{Number, Value};

        match node {
            Node::Scalar(scalar) => match scalar {
                Scalar::Null => Value::Null,
                Scalar::Bool(b) => Value::Bool(b),
                Scalar::Int(n) => Value::Number(Number::from(n)),
                Scalar::Uint(n) => Value::Number(Number::from(n)),
                Scalar::Float(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
                Scalar::Number(text) => match text.parse::<Number>() {
                    Ok(n) => Value::Number(n),
                    Err(_) => Value::String(text),
                },
                Scalar::String(s) => Value::String(s),
                Scalar::Bytes(b) => Value::Array(b.into_iter().map(Value::from).collect()),
            },
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
