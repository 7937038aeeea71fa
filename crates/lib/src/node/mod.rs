//! The dynamic value tree.
//!
//! A document is a tree of [`Node`]s. Every node is exactly one of:
//!
//! - [`Node::Scalar`] - a leaf ([`Scalar`]: null, bool, number, text, bytes)
//! - [`Node::Sequence`] - an ordered list addressed by index `0..len`
//! - [`Node::Mapping`] - string keys to nodes, insertion order preserved
//!
//! Nodes are plain owned values. Path-based reading and writing lives in
//! [`crate::path`]; the [`crate::Document`] type ties the two together.
//!
//! ```
//! use pathdoc::node::Node;
//!
//! let node = Node::from(vec![Node::from(1), Node::from("two")]);
//! assert!(node.is_sequence());
//! assert_eq!(node.len(), Some(2));
//! assert_eq!(node.child("1").and_then(Node::as_str), Some("two"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;

use crate::path::{PathError, is_numeric};

mod handle;
mod scalar;
pub mod wire;

pub use handle::NodeMut;
pub use scalar::Scalar;

/// Ordered child list of a [`Node::Sequence`].
pub type Sequence = Vec<Node>;

/// Keyed children of a [`Node::Mapping`].
pub type Mapping = IndexMap<String, Node>;

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf value
    Scalar(Scalar),
    /// Ordered collection
    Sequence(Sequence),
    /// Keyed collection with unique keys
    Mapping(Mapping),
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Scalar::Null)
    }
}

impl Node {
    /// The null scalar.
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// An empty sequence.
    pub fn sequence() -> Self {
        Node::Sequence(Sequence::new())
    }

    /// An empty mapping.
    pub fn mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    /// A byte blob scalar.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Node::Scalar(Scalar::Bytes(bytes.into()))
    }

    /// Builds a node from any serde-serializable value.
    ///
    /// This is the struct-to-tree conversion used by
    /// [`Document::set_serialized`](crate::Document::set_serialized).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TypeConversion`] when the value cannot be
    /// represented, e.g. a map with non-string keys.
    pub fn from_serialize<T>(value: &T) -> Result<Self, PathError>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_value(value)
            .map(Node::from)
            .map_err(|e| PathError::TypeConversion {
                reason: e.to_string(),
            })
    }

    /// Returns true for [`Scalar::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Returns true if this is a leaf
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns true if this is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Returns true if this is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns true if this node can hold children
    pub fn is_container(&self) -> bool {
        !self.is_scalar()
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Scalar(scalar) => scalar.type_name(),
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    /// Number of children for containers, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Node::Scalar(_) => None,
            Node::Sequence(items) => Some(items.len()),
            Node::Mapping(entries) => Some(entries.len()),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_scalar().and_then(Scalar::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// Looks up one child by a literal key.
    ///
    /// Mappings match the key exactly; sequences accept an all-digit key that
    /// is in range. Scalars have no children.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.get(key),
            Node::Sequence(items) => items.get(sequence_index(key)?),
            Node::Scalar(_) => None,
        }
    }

    /// Mutable counterpart of [`Node::child`].
    pub fn child_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self {
            Node::Mapping(entries) => entries.get_mut(key),
            Node::Sequence(items) => items.get_mut(sequence_index(key)?),
            Node::Scalar(_) => None,
        }
    }

    /// Follows a route of literal keys from this node.
    pub fn follow<S: AsRef<str>>(&self, route: &[S]) -> Option<&Node> {
        route
            .iter()
            .try_fold(self, |node, key| node.child(key.as_ref()))
    }

    /// Follows a route of literal keys, returning a mutable reference.
    pub fn follow_mut<S: AsRef<str>>(&mut self, route: &[S]) -> Option<&mut Node> {
        let mut current = self;
        for key in route {
            current = current.child_mut(key.as_ref())?;
        }
        Some(current)
    }

    /// Converts to compact JSON text.
    ///
    /// Byte blobs become arrays of numbers; non-finite floats become `null`.
    pub fn to_json_string(&self) -> String {
        // Every node has a JSON form, so this never falls back
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn sequence_index(key: &str) -> Option<usize> {
    if !is_numeric(key) {
        return None;
    }
    key.parse().ok()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(scalar) => write!(f, "{scalar}"),
            Node::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Scalar-like conversions
impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

macro_rules! node_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

node_from_scalar!(bool, i32, i64, u32, u64, usize, f32, f64, String, &str, ());

// Container conversions
impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(value: Vec<T>) -> Self {
        Node::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(value: [T; N]) -> Self {
        Node::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<IndexMap<String, T>> for Node {
    fn from(value: IndexMap<String, T>) -> Self {
        Node::Mapping(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Node>> From<HashMap<String, T>> for Node {
    fn from(value: HashMap<String, T>) -> Self {
        Node::Mapping(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Node>> From<BTreeMap<String, T>> for Node {
    fn from(value: BTreeMap<String, T>) -> Self {
        Node::Mapping(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Node::null, Into::into)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Sequence(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// Typed reads, used by `Document::get_as`
macro_rules! try_from_node_via_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<&Node> for $ty {
                type Error = PathError;

                fn try_from(value: &Node) -> Result<Self, Self::Error> {
                    match value {
                        Node::Scalar(scalar) => <$ty>::try_from(scalar),
                        other => Err(PathError::TypeConversion {
                            reason: format!(
                                "expected {}, found {}",
                                stringify!($ty),
                                other.type_name()
                            ),
                        }),
                    }
                }
            }
        )*
    };
}

try_from_node_via_scalar!(String, i64, u64, f64, bool);

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = PathError;

    fn try_from(value: &'a Node) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| PathError::TypeConversion {
            reason: format!("expected string, found {}", value.type_name()),
        })
    }
}

impl TryFrom<&Node> for Sequence {
    type Error = PathError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_sequence().cloned().ok_or_else(|| PathError::TypeConversion {
            reason: format!("expected sequence, found {}", value.type_name()),
        })
    }
}

impl TryFrom<&Node> for Mapping {
    type Error = PathError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_mapping().cloned().ok_or_else(|| PathError::TypeConversion {
            reason: format!("expected mapping, found {}", value.type_name()),
        })
    }
}

// Comparisons against primitives, mirroring `Scalar`
impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl PartialEq<f64> for Node {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}
