//! Read-side path resolution.
//!
//! Resolution produces a *route*: the literal keys leading from the root to
//! the addressed node. The route is then followed with [`Node::follow`] or
//! [`Node::follow_mut`], so the same lookup serves shared and exclusive
//! borrows.
//!
//! In [`Mode::Strict`] every separator splits the path. In
//! [`Mode::ViolenceCheck`] keys that themselves contain the separator are
//! found too: at each level the longest literal key matching a prefix of the
//! remaining path wins.

use tracing::trace;

use super::{is_root_path, separator_char};
use crate::node::Node;

/// How a path is matched against mapping keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Split on every separator
    #[default]
    Strict,
    /// Prefer the longest literal key that matches a prefix of the remaining path
    ViolenceCheck,
}

impl From<bool> for Mode {
    fn from(violence_check: bool) -> Self {
        if violence_check {
            Mode::ViolenceCheck
        } else {
            Mode::Strict
        }
    }
}

/// Resolves `path` to the route of keys leading to an existing node.
///
/// The whole-document path yields an empty route. Returns `None` for the
/// empty path and for paths that do not exist.
pub fn route<'p>(root: &Node, path: &'p str, separator: u8, mode: Mode) -> Option<Vec<&'p str>> {
    walk(root, path, separator, mode).map(|(route, _)| route)
}

/// Resolves `path` to the node it addresses.
///
/// ```rust
/// use pathdoc::node::Node;
/// use pathdoc::path::{Mode, resolve::resolve};
///
/// let root = Node::from(serde_json::json!({"a.b": 1, "a": {"b": 2}}));
///
/// assert_eq!(resolve(&root, "a.b", b'.', Mode::Strict), Some(&Node::from(2)));
/// assert_eq!(resolve(&root, "a.b", b'.', Mode::ViolenceCheck), Some(&Node::from(1)));
/// ```
pub fn resolve<'n>(root: &'n Node, path: &str, separator: u8, mode: Mode) -> Option<&'n Node> {
    walk(root, path, separator, mode).map(|(_, node)| node)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'n>(
    root: &'n mut Node,
    path: &str,
    separator: u8,
    mode: Mode,
) -> Option<&'n mut Node> {
    let route = route(root, path, separator, mode)?;
    root.follow_mut(&route)
}

fn walk<'n, 'p>(
    root: &'n Node,
    path: &'p str,
    separator: u8,
    mode: Mode,
) -> Option<(Vec<&'p str>, &'n Node)> {
    if path.is_empty() {
        return None;
    }
    if is_root_path(path, separator) {
        return Some((Vec::new(), root));
    }

    let found = match mode {
        Mode::Strict => walk_strict(root, path, separator),
        Mode::ViolenceCheck => walk_longest_key(root, path, separator),
    };

    trace!(
        pattern = path,
        mode = ?mode,
        found = found.is_some(),
        "resolved pattern"
    );
    found
}

fn walk_strict<'n, 'p>(
    root: &'n Node,
    path: &'p str,
    separator: u8,
) -> Option<(Vec<&'p str>, &'n Node)> {
    let mut route = Vec::new();
    let mut current = root;
    for key in path.split(separator_char(separator)) {
        current = current.child(key)?;
        route.push(key);
    }
    Some((route, current))
}

/// Window search over the unmatched suffix `path[start..]`.
///
/// `path[start..end]` is tried as one literal key. On a miss `end` moves back
/// to the previous separator; on a hit the key is committed and the window
/// restarts after it. A committed key is never revisited.
fn walk_longest_key<'n, 'p>(
    root: &'n Node,
    path: &'p str,
    separator: u8,
) -> Option<(Vec<&'p str>, &'n Node)> {
    let separator = separator_char(separator);
    let mut route = Vec::new();
    let mut current = root;
    let mut start = 0;
    let mut end = path.len();

    loop {
        let candidate = &path[start..end];
        match current.child(candidate) {
            Some(child) => {
                route.push(candidate);
                if end == path.len() {
                    return Some((route, child));
                }
                current = child;
                start = end + separator.len_utf8();
                end = path.len();
            }
            None => end = start + candidate.rfind(separator)?,
        }
    }
}
