//! Parsing persisted sequences and mappings back into collections.
//!
//! The wire format carries no type tags, so reconstruction is heuristic:
//! bracket and brace delimiters are stripped (list-like and set-like text
//! become indistinguishable — both come back as ordered token lists), quote
//! characters and spaces are dropped, and every resulting token goes through
//! integer coercion ([`Token::coerce`]).
//!
//! Known lossy cases, accepted rather than fixed:
//!
//! - A set value round-trips as a list.
//! - An empty collection (`[]` or `{}`) round-trips as a list holding one
//!   empty text token.
//! - A lone text token that happens to look like a bracketed collection
//!   cannot be told apart from one.
//! - Integer-looking text (`"93"`) comes back as an integer.

use std::fs;
use std::path::Path;

use crate::error::{GenontoError, Result};
use crate::types::{Entry, Mapping, Token, Value};

/// Strip quote characters and spaces, split on commas, coerce each token.
fn tokenize(inner: &str) -> Vec<Token> {
    let cleaned = inner.replace('\'', "").replace(' ', "");
    cleaned.split(',').map(Token::coerce).collect()
}

fn is_bracketed(text: &str) -> bool {
    (text.starts_with('[') && text.ends_with(']'))
        || (text.starts_with('{') && text.ends_with('}'))
}

/// Parse line-oriented text into a sequence.
///
/// Each line is trimmed, stripped of outer `[`/`]`/`{`/`}` delimiters, and
/// tokenized. With `flatten = false` every line becomes one [`Entry::Row`];
/// with `flatten = true` all tokens from all lines are extended into a flat
/// sequence of [`Entry::Token`]s (the shape wanted when the file holds a
/// filter-term list rather than records).
///
/// Sequence parsing has no failure mode: any line yields *some* tokens.
pub fn decode_sequence(text: &str, flatten: bool) -> Vec<Entry> {
    let mut out = Vec::new();
    for line in text.lines() {
        let stripped = line
            .trim()
            .trim_matches(|c| matches!(c, '[' | ']' | '{' | '}'));
        let tokens = tokenize(stripped);
        if flatten {
            out.extend(tokens.into_iter().map(Entry::Token));
        } else {
            out.push(Entry::Row(tokens));
        }
    }
    out
}

/// Parse `key: value` lines into a mapping, preserving line order as
/// insertion order.
///
/// Each line must contain exactly one `": "` separator; anything else is a
/// [`GenontoError::Format`] carrying the 1-based line number. A
/// bracket-delimited value parses as a token list; any other value is
/// coerced whole.
pub fn decode_mapping(text: &str) -> Result<Mapping> {
    let mut map = Mapping::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        let parts: Vec<&str> = trimmed.split(": ").collect();
        if parts.len() != 2 {
            return Err(GenontoError::Format {
                line: idx + 1,
                message: format!(
                    "expected exactly one ': ' separator, found {}",
                    parts.len().saturating_sub(1)
                ),
            });
        }
        let (key, raw) = (parts[0], parts[1]);

        let value = if is_bracketed(raw) {
            Value::List(tokenize(&raw[1..raw.len() - 1]))
        } else {
            Value::Scalar(Token::coerce(raw))
        };
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

/// Read and parse a sequence file.
pub fn read_sequence<P: AsRef<Path>>(path: P, flatten: bool) -> Result<Vec<Entry>> {
    Ok(decode_sequence(&fs::read_to_string(path)?, flatten))
}

/// Read and parse a mapping file.
pub fn read_mapping<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    decode_mapping(&fs::read_to_string(path)?)
}
