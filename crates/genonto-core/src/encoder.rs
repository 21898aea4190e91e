//! Line-oriented serialization of sequences and mappings.
//!
//! One top-level element per line. Nested rows and collection values render
//! through the `Display` impls in [`crate::types`]: `[...]` for ordered
//! lists, `{...}` for sets, single quotes around text tokens, integers bare.
//! Mapping lines are `key: value` with a single `": "` separator.
//!
//! The format is deliberately lossy at the margins (see the decoder docs),
//! and it places one obligation on producers: neither a key nor a value's
//! rendered text may itself contain `": "`, or the mapping line cannot be
//! split back apart. The encoder does not police this; it is a documented
//! contract of the format.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{Entry, Mapping};

/// Render a sequence, one entry per line, with a trailing newline.
pub fn encode_sequence(items: &[Entry]) -> String {
    let mut out = String::new();
    for entry in items {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Render a mapping as `key: value` lines in insertion order, with a
/// trailing newline.
pub fn encode_mapping(map: &Mapping) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}

/// Serialize a sequence straight to a file.
pub fn write_sequence<P: AsRef<Path>>(path: P, items: &[Entry]) -> Result<()> {
    fs::write(path, encode_sequence(items))?;
    Ok(())
}

/// Serialize a mapping straight to a file.
pub fn write_mapping<P: AsRef<Path>>(path: P, map: &Mapping) -> Result<()> {
    fs::write(path, encode_mapping(map))?;
    Ok(())
}
