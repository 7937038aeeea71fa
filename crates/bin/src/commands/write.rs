//! Commands that change a document: set, append and remove.

use pathdoc::{Document, Result};
use tracing::info;

use super::parse_value;

pub fn set(doc: &mut Document, path: &str, raw: &str, literal: bool) -> Result<()> {
    doc.set(path, parse_value(raw, literal))?;
    info!(path, "set value");
    Ok(())
}

pub fn append(doc: &mut Document, path: &str, raw: &str, literal: bool) -> Result<()> {
    doc.append(path, parse_value(raw, literal))?;
    info!(path, "appended value");
    Ok(())
}

pub fn remove(doc: &mut Document, path: &str) -> Result<()> {
    doc.remove(path)?;
    info!(path, "removed value");
    Ok(())
}
