//! Output formatting helpers for human-readable and JSON output.

use std::io::Write;

use pathdoc::{Node, Scalar};

use crate::cli::Format;

/// Writes one node followed by a newline.
///
/// Human format prints strings without quotes and containers as indented
/// JSON; JSON format prints compact JSON.
pub fn write_node(out: &mut dyn Write, node: &Node, format: Format) -> std::io::Result<()> {
    match (format, node) {
        (Format::Human, Node::Scalar(Scalar::String(s))) => writeln!(out, "{s}"),
        (Format::Human, Node::Scalar(_)) => writeln!(out, "{}", node.to_json_string()),
        (Format::Human, _) => {
            let text = serde_json::to_string_pretty(node).map_err(std::io::Error::other)?;
            writeln!(out, "{text}")
        }
        (Format::Json, _) => writeln!(out, "{}", node.to_json_string()),
    }
}
