//! Write-side path operations: set, delete and append.
//!
//! Writes split the path on every separator; only reads and append lookups
//! honour [`Mode::ViolenceCheck`]. Missing intermediate nodes are created on
//! the way down, typed by the segment that walks through them: numeric
//! segments create sequences, other segments create mappings. A node of the
//! wrong kind is replaced:
//!
//! - a scalar walked through becomes an empty sequence or mapping,
//! - a sequence walked through with a non-numeric segment becomes a mapping,
//! - a mapping accepts any segment, numeric ones included, as a literal key.
//!
//! Deletes never create or replace anything; a path that does not exist is
//! left alone. Sequence elements are removed with shifting, so no null holes
//! remain.
//!
//! Every write is checked by a read-only [`plan`] before the tree is touched,
//! so a write that fails leaves the tree unchanged.

use tracing::debug;

use super::{Mode, PathError, Pattern, Segment, resolve};
use crate::node::{Mapping, Node, Sequence};

/// Default for the largest index a write may grow a sequence to.
pub const DEFAULT_MAX_INDEX: usize = 1 << 20;

/// The operation carried down a write walk.
#[derive(Debug)]
enum Write {
    Put(Node),
    Delete,
}

/// Stores `value` at `pattern`, creating or replacing nodes along the way.
///
/// The root pattern replaces the whole tree.
///
/// # Errors
///
/// [`PathError::IndexOverflow`] when a numeric segment does not fit `usize`
/// or would grow a sequence past `max_index`. The tree is unchanged then.
pub fn set(
    root: &mut Node,
    pattern: &Pattern<'_>,
    value: Node,
    max_index: usize,
) -> Result<(), PathError> {
    if pattern.is_root() {
        *root = value;
        return Ok(());
    }

    plan(root, pattern.segments(), max_index)?;
    apply(root, pattern.segments(), Write::Put(value))
}

/// Removes the node at `pattern`.
///
/// Removing a missing path is a no-op. The root pattern resets the tree to
/// null.
///
/// # Errors
///
/// [`PathError::IndexOverflow`] when a sequence is walked with a numeric
/// segment that does not fit `usize`. Nothing is removed then.
pub fn delete(root: &mut Node, pattern: &Pattern<'_>) -> Result<(), PathError> {
    if pattern.is_root() {
        *root = Node::null();
        return Ok(());
    }

    apply(root, pattern.segments(), Write::Delete)
}

/// Appends `value` to the sequence at `path`.
///
/// The path is looked up with `mode`. A missing path becomes a one-element
/// sequence (written like [`set`]); an existing sequence is pushed to. The
/// root pattern appends to the root, turning a null root into `[value]`.
///
/// # Errors
///
/// - [`PathError::InvalidPattern`] for the empty path
/// - [`PathError::NotAppendable`] when the path holds a mapping or scalar
/// - [`PathError::IndexOverflow`] as for [`set`]
pub fn append(
    root: &mut Node,
    path: &str,
    value: Node,
    separator: u8,
    mode: Mode,
    max_index: usize,
) -> Result<(), PathError> {
    let pattern = Pattern::parse(path, separator).ok_or_else(|| PathError::InvalidPattern {
        pattern: path.to_string(),
    })?;

    if pattern.is_root() && root.is_null() {
        *root = Node::Sequence(vec![value]);
        return Ok(());
    }

    match resolve::resolve_mut(root, path, separator, mode) {
        Some(Node::Sequence(items)) => {
            items.push(value);
            Ok(())
        }
        Some(other) => {
            debug!(
                pattern = path,
                found = other.type_name(),
                "rejected append to non-sequence"
            );
            Err(PathError::NotAppendable {
                pattern: path.to_string(),
                found: other.type_name().to_string(),
            })
        }
        None => {
            debug!(pattern = path, "append creates a new sequence");
            set(root, &pattern, Node::Sequence(vec![value]), max_index)
        }
    }
}

/// Dry run of a put along `segments`.
///
/// Walks the existing tree without modifying it and reports the first
/// segment that [`set`] would reject.
///
/// # Errors
///
/// [`PathError::IndexOverflow`] for a numeric segment that does not fit
/// `usize`, or that addresses an index above `max_index` beyond the end of a
/// sequence.
pub fn plan(root: &Node, segments: &[Segment<'_>], max_index: usize) -> Result<(), PathError> {
    // `None` stands for a node the write will create or replace
    let mut current = Some(root);

    for segment in segments {
        current = match current {
            Some(Node::Mapping(entries)) => entries.get(segment.as_str()),
            Some(Node::Sequence(items)) if segment.is_numeric() => {
                let index = checked_index(segment, items.len(), max_index)?;
                items.get(index)
            }
            Some(Node::Sequence(_)) => None,
            Some(Node::Scalar(_)) | None => {
                if segment.is_numeric() {
                    checked_index(segment, 0, max_index)?;
                }
                None
            }
        };
    }
    Ok(())
}

/// Largest index a sequence of nodes can address without overflowing its
/// allocation, whatever `max_index` says.
const INDEX_CEILING: usize = isize::MAX as usize / size_of::<Node>() - 1;

fn checked_index(segment: &Segment<'_>, len: usize, max_index: usize) -> Result<usize, PathError> {
    let max_index = max_index.min(INDEX_CEILING);
    match segment.index() {
        Some(index) if index < len || index <= max_index => Ok(index),
        _ => {
            debug!(
                segment = segment.as_str(),
                limit = max_index,
                "rejected write past index limit"
            );
            Err(PathError::IndexOverflow {
                segment: segment.as_str().to_string(),
                limit: max_index,
            })
        }
    }
}

/// The empty container a segment walks into.
fn container_for(segment: &Segment<'_>) -> Node {
    if segment.is_numeric() {
        Node::Sequence(Sequence::new())
    } else {
        Node::Mapping(Mapping::new())
    }
}

fn grow(items: &mut Sequence, index: usize) {
    if index >= items.len() {
        let len = index.saturating_add(1);
        debug!(from = items.len(), to = len, "growing sequence");
        items.resize_with(len, Node::null);
    }
}

/// Carries `write` down `segments`.
///
/// Puts are planned beforehand, so only a delete can hit an overflowed
/// index here, and it does so before anything is removed.
fn apply(node: &mut Node, segments: &[Segment<'_>], write: Write) -> Result<(), PathError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };

    let wrong_kind = match node {
        Node::Scalar(_) => true,
        Node::Sequence(_) => !segment.is_numeric(),
        Node::Mapping(_) => false,
    };
    if wrong_kind {
        if let Write::Delete = write {
            return Ok(());
        }
        if !node.is_null() {
            debug!(
                segment = segment.as_str(),
                from = node.type_name(),
                "replacing node of the wrong kind"
            );
        }
        *node = container_for(segment);
    }

    match node {
        Node::Mapping(entries) => {
            let key = segment.as_str();
            match (write, rest.is_empty()) {
                (Write::Put(value), true) => {
                    entries.insert(key.to_string(), value);
                }
                (Write::Delete, true) => {
                    entries.shift_remove(key);
                }
                (Write::Put(value), false) => {
                    let child = entries.entry(key.to_string()).or_default();
                    return apply(child, rest, Write::Put(value));
                }
                (Write::Delete, false) => {
                    if let Some(child) = entries.get_mut(key) {
                        return apply(child, rest, Write::Delete);
                    }
                }
            }
        }
        Node::Sequence(items) => {
            let Some(index) = segment.index() else {
                debug!(segment = segment.as_str(), "index does not fit usize");
                return Err(PathError::IndexOverflow {
                    segment: segment.as_str().to_string(),
                    limit: usize::MAX,
                });
            };
            match (write, rest.is_empty()) {
                (Write::Put(value), true) => {
                    grow(items, index);
                    if let Some(slot) = items.get_mut(index) {
                        *slot = value;
                    }
                }
                (Write::Delete, true) => {
                    if index < items.len() {
                        items.remove(index);
                    }
                }
                (Write::Put(value), false) => {
                    grow(items, index);
                    if let Some(child) = items.get_mut(index) {
                        return apply(child, rest, Write::Put(value));
                    }
                }
                (Write::Delete, false) => {
                    if let Some(child) = items.get_mut(index) {
                        return apply(child, rest, Write::Delete);
                    }
                }
            }
        }
        Node::Scalar(_) => {}
    }
    Ok(())
}
