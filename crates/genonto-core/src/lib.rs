//! # genonto-core
//!
//! Cross-references genes with mutation characteristics and Gene Ontology
//! terms from three flat-file formats: MAF mutation records, GAF gene
//! annotations, and OBO ontology definitions.
//!
//! The heart of the crate is format-agnostic: a tagged value model over
//! loosely-typed records ([`types`]), substring-based include/exclude
//! filtering over sequences and mappings ([`filter`]), and a line-oriented
//! codec that persists either shape as plain text and heuristically
//! reconstructs it ([`encoder`], [`decoder`]). The format parsers ([`maf`],
//! [`goa`], [`obo`]) feed that core.
//!
//! ## Quick start
//!
//! ```rust
//! use genonto_core::{
//!     decode_mapping, encode_mapping, filter_mapping, FilterMode, FilterTarget, Mapping,
//!     Token, Value,
//! };
//!
//! let mut genes = Mapping::new();
//! genes.insert("TP53".into(), Value::List(vec![Token::from("GO:0006915")]));
//! genes.insert("BRCA1".into(), Value::Scalar(Token::from("unannotated")));
//!
//! // Keep genes whose annotation collection mentions apoptosis (GO:0006915).
//! let hits = filter_mapping(&genes, &["GO:0006915"], FilterTarget::Value, FilterMode::Include);
//! assert_eq!(hits.len(), 1);
//!
//! // Persist and reconstruct.
//! let text = encode_mapping(&hits);
//! assert_eq!(text, "TP53: ['GO:0006915']\n");
//! assert_eq!(decode_mapping(&text).unwrap(), hits);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Token` / `Entry` / `Value` tagged value model, `Mapping`
//! - [`filter`] — generic include/exclude filtering
//! - [`encoder`] / [`decoder`] — line-oriented text persistence
//! - [`maf`] / [`goa`] / [`obo`] — format-specific extraction
//! - [`error`] — error types for parse/codec/fetch failures

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod goa;
pub mod maf;
pub mod obo;
pub mod types;

pub use decoder::{decode_mapping, decode_sequence, read_mapping, read_sequence};
pub use encoder::{encode_mapping, encode_sequence, write_mapping, write_sequence};
pub use error::{GenontoError, Result};
pub use filter::{filter_mapping, filter_sequence, FilterMode, FilterTarget};
pub use types::{try_parse_int, Entry, Mapping, Token, Value};
