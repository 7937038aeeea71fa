//! Read-only commands: get, len and contains.
//!
//! Each returns whether the path was found so the caller can pick an exit
//! status.

use std::io::Write;

use pathdoc::Document;

use super::parse_value;
use crate::cli::Format;
use crate::output::write_node;

pub fn get(
    doc: &Document,
    path: &str,
    default: Option<&str>,
    format: Format,
    out: &mut dyn Write,
) -> std::io::Result<bool> {
    match (doc.get(path), default) {
        (Some(node), _) => write_node(out, node, format).map(|()| true),
        (None, Some(raw)) => write_node(out, &parse_value(raw, false), format).map(|()| true),
        (None, None) => Ok(false),
    }
}

pub fn len(doc: &Document, path: &str, out: &mut dyn Write) -> std::io::Result<bool> {
    match doc.len(path) {
        Some(n) => writeln!(out, "{n}").map(|()| true),
        None => Ok(false),
    }
}

pub fn contains(doc: &Document, path: &str) -> bool {
    doc.contains(path)
}
