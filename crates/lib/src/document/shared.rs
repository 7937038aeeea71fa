//! A document that can be shared between threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;

use super::{Document, Options};
use crate::Result;
use crate::node::{Node, NodeMut};

/// A [`Document`] behind a reader/writer lock.
///
/// Clones share the same document. Every operation holds the lock for its
/// whole duration: shared for reads, exclusive for writes, so operations on
/// one document are linearizable. Reads return owned snapshots because a
/// borrow cannot outlive the lock; use [`SharedDocument::update`] to edit a
/// container in place.
///
/// A panic in another thread while it held the lock does not poison the
/// document; the lock is recovered and the tree is used as left.
///
/// ```rust
/// use std::thread;
/// use pathdoc::SharedDocument;
///
/// let doc = SharedDocument::new();
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let doc = doc.clone();
///         thread::spawn(move || doc.append("hits", i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap()?;
/// }
/// assert_eq!(doc.len("hits"), Some(4));
/// # Ok::<(), pathdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<RwLock<Document>>,
}

impl SharedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self::from(Document::with_options(options))
    }

    fn read(&self) -> RwLockReadGuard<'_, Document> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Document> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access to the document.
    pub fn with_read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.read())
    }

    /// Runs `f` with exclusive access to the document.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.write())
    }

    /// A copy of the current document.
    pub fn snapshot(&self) -> Document {
        self.read().clone()
    }

    /// Clone of the node at `path`.
    pub fn get(&self, path: &str) -> Option<Node> {
        self.read().get(path).cloned()
    }

    pub fn get_or(&self, path: &str, default: impl Into<Node>) -> Node {
        self.read().get_or(path, default)
    }

    /// Converts the node at `path`; see [`Document::get_as`].
    pub fn get_as<T>(&self, path: &str) -> Option<T>
    where
        T: for<'a> TryFrom<&'a Node>,
    {
        self.read().get(path).and_then(|node| T::try_from(node).ok())
    }

    pub fn get_deserialized<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.read().get_deserialized(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.read().contains(path)
    }

    pub fn len(&self, path: &str) -> Option<usize> {
        self.read().len(path)
    }

    pub fn set(&self, path: &str, value: impl Into<Node>) -> Result<()> {
        self.write().set(path, value)
    }

    pub fn remove(&self, path: &str) -> Result<()> {
        self.write().remove(path)
    }

    pub fn append(&self, path: &str, value: impl Into<Node>) -> Result<()> {
        self.write().append(path, value)
    }

    /// Runs `f` on a mutable handle to the node at `path` under the write
    /// lock. Returns `None` without calling `f` when the path is absent.
    pub fn update<R>(&self, path: &str, f: impl FnOnce(NodeMut<'_>) -> R) -> Option<R> {
        let mut doc = self.write();
        doc.get_mut(path).map(f)
    }

    pub fn separator(&self) -> u8 {
        self.read().separator()
    }

    pub fn set_separator(&self, separator: u8) {
        self.write().set_separator(separator);
    }

    pub fn violence_check(&self) -> bool {
        self.read().violence_check()
    }

    pub fn set_violence_check(&self, enabled: bool) {
        self.write().set_violence_check(enabled);
    }

    pub fn to_json_string(&self) -> Result<String> {
        self.read().to_json_string()
    }

    /// Takes the document out if this is the last handle to it.
    pub fn try_unwrap(self) -> std::result::Result<Document, SharedDocument> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| SharedDocument { inner })
    }
}

impl From<Document> for SharedDocument {
    fn from(doc: Document) -> Self {
        SharedDocument {
            inner: Arc::new(RwLock::new(doc)),
        }
    }
}
