//! Command implementations.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use pathdoc::{Document, Node, Options};
use tracing::debug;

pub mod read;
pub mod write;

/// Loads a JSON document from `file`, or from stdin when it is `-`.
pub fn load_document(file: &Path, options: Options) -> Result<Document, Box<dyn std::error::Error>> {
    let input = if file == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(file)?
    };
    debug!(file = %file.display(), bytes = input.len(), "loaded document");

    // An empty file is an empty document
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::with_options(options));
    }
    Ok(Document::from_json_with(&input, options)?)
}

/// Writes `doc` back to `file`, or to `out` when not editing in place.
pub fn save_document(
    doc: &Document,
    file: &Path,
    in_place: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = doc.to_json_pretty()?;
    if in_place && file != Path::new("-") {
        fs::write(file, format!("{text}\n"))?;
        debug!(file = %file.display(), "saved document");
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Turns a command-line value into a node: JSON when it parses, otherwise
/// (or with `literal`) the raw string.
pub fn parse_value(raw: &str, literal: bool) -> Node {
    if literal {
        return Node::from(raw);
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Node::from(raw))
}
