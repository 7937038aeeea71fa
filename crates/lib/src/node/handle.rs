//! Mutable views into a document tree.

use super::{Mapping, Node, Scalar, Sequence};

/// A handle returned by [`Document::get_mut`](crate::Document::get_mut).
///
/// Containers are borrowed from the document, so changes made through a
/// `Sequence` or `Mapping` handle are visible to later reads. A `Scalar`
/// handle is a copy of the stored value; replace scalars with
/// [`Document::set`](crate::Document::set).
#[derive(Debug)]
pub enum NodeMut<'a> {
    Scalar(Scalar),
    Sequence(&'a mut Sequence),
    Mapping(&'a mut Mapping),
}

impl<'a> From<&'a mut Node> for NodeMut<'a> {
    fn from(node: &'a mut Node) -> Self {
        match node {
            Node::Scalar(scalar) => NodeMut::Scalar(scalar.clone()),
            Node::Sequence(items) => NodeMut::Sequence(items),
            Node::Mapping(entries) => NodeMut::Mapping(entries),
        }
    }
}

impl NodeMut<'_> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, NodeMut::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, NodeMut::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, NodeMut::Mapping(_))
    }

    /// Number of children for containers, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            NodeMut::Scalar(_) => None,
            NodeMut::Sequence(items) => Some(items.len()),
            NodeMut::Mapping(entries) => Some(entries.len()),
        }
    }

    pub fn as_sequence(&mut self) -> Option<&mut Sequence> {
        match self {
            NodeMut::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&mut self) -> Option<&mut Mapping> {
        match self {
            NodeMut::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            NodeMut::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Clones the viewed value into an owned node.
    pub fn to_node(&self) -> Node {
        match self {
            NodeMut::Scalar(scalar) => Node::Scalar(scalar.clone()),
            NodeMut::Sequence(items) => Node::Sequence(items.to_vec()),
            NodeMut::Mapping(entries) => Node::Mapping((*entries).clone()),
        }
    }
}
