//! Error types for parsing, codec, and retrieval operations.
//!
//! Two conditions are deliberately *not* errors: a failed integer coercion
//! falls back to text ([`crate::types::Token::coerce`]), and a missed lookup
//! during gene/term resolution simply omits the entry. Everything else fails
//! the whole operation; no partial results are returned.

use thiserror::Error;

/// Errors that can occur while parsing flat files, decoding persisted
/// collections, or fetching the ontology resource.
#[derive(Error, Debug)]
pub enum GenontoError {
    /// A line (or OBO block) did not match the expected format.
    /// Positions are 1-based.
    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A requested column index is out of range for a record.
    #[error("column {index} out of range in record {record} ({len} fields)")]
    Column {
        record: usize,
        index: usize,
        len: usize,
    },

    /// File read/write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Ontology retrieval failure. Fatal: there is no retry.
    #[error("failed to fetch ontology from {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
}

/// Convenience alias used throughout genonto-core.
pub type Result<T> = std::result::Result<T, GenontoError>;
