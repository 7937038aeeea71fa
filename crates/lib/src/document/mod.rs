//! Path-addressed documents.
//!
//! A [`Document`] owns a [`Node`] tree plus the [`Options`] that say how
//! paths are read: the separator byte, whether keys containing the separator
//! are resolved (violence check), and how far a write may grow a sequence.
//!
//! # Usage
//!
//! ```rust
//! use pathdoc::Document;
//!
//! let mut doc = Document::new();
//! doc.set("users.list.1.score", 100)?;
//!
//! assert_eq!(doc.get_as::<i64>("users.list.1.score"), Some(100));
//! assert!(doc.get("users.list.0").is_some_and(|n| n.is_null()));
//! assert_eq!(doc.len("users.list"), Some(2));
//!
//! doc.append("users.tags", "new")?;
//! assert_eq!(doc.to_json_string()?, r#"{"users":{"list":[null,{"score":100}],"tags":["new"]}}"#);
//! # Ok::<(), pathdoc::Error>(())
//! ```
//!
//! `Document` is not synchronized: writes take `&mut self`. Use
//! [`SharedDocument`] to share one document between threads.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::Result;
use crate::codec::{self, ContentType, Decoder, Encoder, JsonCodec};
use crate::node::{Node, NodeMut};
use crate::path::{PathError, Pattern, mutate, resolve};

mod options;
mod shared;

pub use options::Options;
pub use shared::SharedDocument;

/// A node tree addressed by string paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Node,
    options: Options,
}

impl Document {
    /// Creates an empty document. The root is null until the first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given options.
    pub fn with_options(options: Options) -> Self {
        Document {
            root: Node::null(),
            options,
        }
    }

    /// Wraps an existing tree.
    pub fn from_node(root: impl Into<Node>) -> Self {
        Document {
            root: root.into(),
            options: Options::default(),
        }
    }

    /// Builds a document from any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::from_node(Node::from_serialize(value)?))
    }

    /// Decodes `input` with `decoder`.
    pub fn decode(input: &[u8], decoder: &dyn Decoder, options: Options) -> Result<Self> {
        let root = decoder.decode(input)?;
        Ok(Document { root, options })
    }

    /// Decodes `input` with the bundled codec for `content_type`, honouring
    /// [`Options::preserve_numbers`].
    pub fn load(content_type: ContentType, input: &[u8], options: Options) -> Result<Self> {
        let root = codec::decode(content_type, input, options.preserve_numbers)?;
        Ok(Document { root, options })
    }

    /// Parses JSON text with default options.
    pub fn from_json(input: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_json_with(input, Options::default())
    }

    /// Parses JSON text with the given options.
    pub fn from_json_with(input: impl AsRef<[u8]>, options: Options) -> Result<Self> {
        let codec = JsonCodec::default().preserve_numbers(options.preserve_numbers);
        Self::decode(input.as_ref(), &codec, options)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn separator(&self) -> u8 {
        self.options.separator
    }

    /// Changes the separator for all later operations.
    pub fn set_separator(&mut self, separator: u8) {
        self.options.separator = separator;
    }

    pub fn violence_check(&self) -> bool {
        self.options.violence_check
    }

    /// Turns resolution of separator-containing keys on or off for all later
    /// operations.
    pub fn set_violence_check(&mut self, enabled: bool) {
        self.options.violence_check = enabled;
    }

    pub fn set_max_index(&mut self, max_index: usize) {
        self.options.max_index = max_index;
    }

    /// Builder-style [`Document::set`].
    ///
    /// ```rust
    /// # use pathdoc::Document;
    /// let doc = Document::new().with("name", "gf")?.with("tags.0", "a")?;
    /// assert_eq!(doc.to_json_string()?, r#"{"name":"gf","tags":["a"]}"#);
    /// # Ok::<(), pathdoc::Error>(())
    /// ```
    pub fn with(mut self, path: &str, value: impl Into<Node>) -> Result<Self> {
        self.set(path, value)?;
        Ok(self)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_node(self) -> Node {
        self.root
    }

    /// True while the root is null.
    pub fn is_null(&self) -> bool {
        self.root.is_null()
    }

    /// Returns the node at `path`, or `None` if the path is empty or absent.
    ///
    /// The separator alone returns the root.
    pub fn get(&self, path: &str) -> Option<&Node> {
        resolve::resolve(
            &self.root,
            path,
            self.options.separator,
            self.options.mode(),
        )
    }

    /// Returns a clone of the node at `path`, or `default` when absent.
    pub fn get_or(&self, path: &str, default: impl Into<Node>) -> Node {
        self.get(path)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// Converts the node at `path` with `TryFrom<&Node>`.
    ///
    /// Returns `None` when the path is absent or the node has another type.
    pub fn get_as<'a, T>(&'a self, path: &str) -> Option<T>
    where
        T: TryFrom<&'a Node>,
    {
        self.get(path).and_then(|node| T::try_from(node).ok())
    }

    /// Deserializes the node at `path` into `T`.
    ///
    /// An absent path deserializes from null, so `Option<T>` yields `None`.
    pub fn get_deserialized<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let node = self.get(path).cloned().unwrap_or_default();
        Ok(serde_json::from_value(serde_json::Value::from(node))?)
    }

    /// Deserializes the whole document into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(serde_json::Value::from(
            self.root.clone(),
        ))?)
    }

    /// Returns a mutable handle to the node at `path`.
    ///
    /// Sequence and mapping handles write through to this document.
    pub fn get_mut(&mut self, path: &str) -> Option<NodeMut<'_>> {
        let (separator, mode) = (self.options.separator, self.options.mode());
        resolve::resolve_mut(&mut self.root, path, separator, mode).map(NodeMut::from)
    }

    /// True if `path` exists. An explicit null counts as present.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Child count of the sequence or mapping at `path`.
    ///
    /// `None` for absent paths and for scalars.
    pub fn len(&self, path: &str) -> Option<usize> {
        self.get(path).and_then(Node::len)
    }

    /// Stores `value` at `path`, creating intermediate nodes as needed.
    ///
    /// Intermediate nodes of the wrong kind are replaced: a scalar becomes a
    /// sequence or mapping, and a sequence walked through with a key becomes
    /// a mapping. The separator alone replaces the whole document.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidPattern`] for the empty path
    /// - [`PathError::IndexOverflow`] for indices beyond `usize` or
    ///   [`Options::max_index`]; the document is unchanged then
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> Result<()> {
        let pattern = self.pattern(path)?;
        mutate::set(
            &mut self.root,
            &pattern,
            value.into(),
            self.options.max_index,
        )?;
        Ok(())
    }

    /// Serializes `value` and stores it at `path`.
    pub fn set_serialized<T: Serialize + ?Sized>(&mut self, path: &str, value: &T) -> Result<()> {
        let node = Node::from_serialize(value)?;
        self.set(path, node)
    }

    /// Removes the node at `path`; a missing path is not an error.
    ///
    /// Sequence elements after a removed index shift down. The separator
    /// alone resets the document to null.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidPattern`] for the empty path
    /// - [`PathError::IndexOverflow`] when a sequence on the way is indexed
    ///   with a number beyond `usize`
    pub fn remove(&mut self, path: &str) -> Result<()> {
        let pattern = self.pattern(path)?;
        mutate::delete(&mut self.root, &pattern)?;
        Ok(())
    }

    /// Appends `value` to the sequence at `path`, creating it if absent.
    ///
    /// The lookup honours the violence check, but creating a missing
    /// sequence is a plain [`set`](Self::set) that splits on every
    /// separator. With the violence check on, a path that only exists through
    /// a dotted key (`"a.b.list"` over `{"a.b": {}}`) therefore never finds
    /// the sequence it created, and each call replaces the sequence at the
    /// split path with a fresh one-element sequence.
    ///
    /// # Errors
    ///
    /// [`PathError::NotAppendable`] when `path` holds a mapping or scalar.
    pub fn append(&mut self, path: &str, value: impl Into<Node>) -> Result<()> {
        mutate::append(
            &mut self.root,
            path,
            value.into(),
            self.options.separator,
            self.options.mode(),
            self.options.max_index,
        )?;
        Ok(())
    }

    /// Copies the subtree at `path` into a new document with the same options.
    pub fn sub_document(&self, path: &str) -> Option<Document> {
        self.get(path).map(|node| Document {
            root: node.clone(),
            options: self.options,
        })
    }

    /// Copies each element of the sequence at `path` into its own document.
    ///
    /// Empty when the path is absent or not a sequence.
    pub fn sub_documents(&self, path: &str) -> Vec<Document> {
        self.get(path)
            .and_then(Node::as_sequence)
            .map(|items| {
                items
                    .iter()
                    .map(|item| Document {
                        root: item.clone(),
                        options: self.options,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Copies each entry of the mapping at `path` into its own document.
    ///
    /// Empty when the path is absent or not a mapping.
    pub fn sub_document_map(&self, path: &str) -> IndexMap<String, Document> {
        self.get(path)
            .and_then(Node::as_mapping)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, value)| {
                        let doc = Document {
                            root: value.clone(),
                            options: self.options,
                        };
                        (key.clone(), doc)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Writes the document with `encoder`.
    pub fn encode(&self, encoder: &dyn Encoder) -> Result<Vec<u8>> {
        Ok(encoder.encode(&self.root)?)
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    fn pattern<'p>(&self, path: &'p str) -> std::result::Result<Pattern<'p>, PathError> {
        Pattern::parse(path, self.options.separator).ok_or_else(|| PathError::InvalidPattern {
            pattern: path.to_string(),
        })
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Document::from_node(root)
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        doc.root
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root.to_json_string())
    }
}
