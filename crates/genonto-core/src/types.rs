//! Value model for loosely-typed genomic records and mappings.
//!
//! The upstream flat-file formats carry no schema: a field is "whatever text
//! sat between two tabs", a mapping value is a scalar, a list, or a set
//! depending on which parser produced it. Instead of dispatching on runtime
//! shape, everything is expressed through three tagged types:
//!
//! - [`Token`] — one atomic field, integer or text
//! - [`Entry`] — one element of a sequence: a bare token or a nested row
//! - [`Value`] — one mapping value: scalar, ordered list, or deduplicated set
//!
//! `Display` renders the wire form used by the line-oriented codec: bare
//! tokens at top level, single-quoted text inside `[...]` lists and `{...}`
//! sets, integers always bare. Both codec directions agree on exactly this
//! convention.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// Attempt an integer parse, `None` on failure.
///
/// This is the whole of the type-coercion heuristic: the wire format cannot
/// distinguish `"93"` (a column position) from `"HGVSp"` (a column title), so
/// reconstruction tries integers first and keeps text otherwise. A failed
/// parse is never an error.
pub fn try_parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// One atomic field: an integer where the text form parses as one, text
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Int(i64),
    Text(String),
}

impl Token {
    /// Coerce raw text into a token via [`try_parse_int`].
    pub fn coerce(text: &str) -> Token {
        match try_parse_int(text) {
            Some(n) => Token::Int(n),
            None => Token::Text(text.to_string()),
        }
    }

    /// The text form used for substring matching and bare serialization.
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Token::Int(n) => Cow::Owned(n.to_string()),
            Token::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Token {
        Token::Int(n)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Token {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Token {
        Token::Text(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{}", n),
            Token::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Quoted form used inside list/set renderings: text tokens get single
/// quotes, integers stay bare.
fn fmt_quoted(token: &Token, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match token {
        Token::Int(n) => write!(f, "{}", n),
        Token::Text(s) => write!(f, "'{}'", s),
    }
}

fn fmt_tokens<'a, I>(tokens: I, open: char, close: char, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: IntoIterator<Item = &'a Token>,
{
    write!(f, "{}", open)?;
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_quoted(token, f)?;
    }
    write!(f, "{}", close)
}

/// One element of a sequence: a bare token, or a nested row of tokens
/// (a record extracted from one MAF line, for instance). Nesting is one
/// level deep; the source formats never go further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Token(Token),
    Row(Vec<Token>),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Token(t) => write!(f, "{}", t),
            Entry::Row(tokens) => fmt_tokens(tokens, '[', ']', f),
        }
    }
}

/// One mapping value. The variant records which shape the producing parser
/// chose; the filter and the codec dispatch on it by pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Token),
    List(Vec<Token>),
    Set(BTreeSet<Token>),
}

impl Value {
    /// Iterate the collection elements of a `List` or `Set`; a `Scalar`
    /// yields its single token. Used wherever "any element of the value"
    /// semantics apply uniformly.
    pub fn tokens(&self) -> Box<dyn Iterator<Item = &Token> + '_> {
        match self {
            Value::Scalar(t) => Box::new(std::iter::once(t)),
            Value::List(ts) => Box::new(ts.iter()),
            Value::Set(ts) => Box::new(ts.iter()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(t) => write!(f, "{}", t),
            Value::List(tokens) => fmt_tokens(tokens, '[', ']', f),
            Value::Set(tokens) => fmt_tokens(tokens, '{', '}', f),
        }
    }
}

/// Keyed collection with insertion order preserved for serialization.
/// Keys are text tokens (gene symbols, GO IDs, column titles).
pub type Mapping = IndexMap<String, Value>;

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Int(n) => serializer.serialize_i64(*n),
            Token::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Token(t) => t.serialize(serializer),
            Entry::Row(tokens) => serializer.collect_seq(tokens),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(t) => t.serialize(serializer),
            Value::List(tokens) => serializer.collect_seq(tokens),
            Value::Set(tokens) => serializer.collect_seq(tokens),
        }
    }
}
