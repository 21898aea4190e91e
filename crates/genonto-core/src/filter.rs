//! Generic inclusion/exclusion filtering over sequences and mappings.
//!
//! One semantic core drives every variant: a candidate *matches* a filter
//! when at least one filter term is a substring of the candidate's text form.
//! Collection candidates (a nested row, a list or set value) match when any
//! of their elements matches any term — a short-circuit OR across both loops.
//! `Include` keeps matching candidates, `Exclude` drops them.
//!
//! Consequences worth spelling out:
//!
//! - An empty term slice matches nothing, so `Include` yields an empty
//!   result and `Exclude` returns the input unchanged.
//! - For any non-empty term set, the `Include` and `Exclude` results of a
//!   key filter partition the original key set.
//! - Inputs are never mutated; survivors are cloned into a fresh collection
//!   in their original relative order.

use crate::types::{Entry, Mapping, Token, Value};

/// Whether matching candidates are kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep candidates that contain at least one filter term.
    Include,
    /// Drop candidates that contain at least one filter term.
    Exclude,
}

/// Which side of a mapping entry is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    /// Test the key text.
    Key,
    /// Test the value: its text form for scalars, any element for
    /// lists and sets.
    Value,
}

/// Does any filter term occur as a substring of this text?
fn text_matches(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

fn token_matches(token: &Token, terms: &[&str]) -> bool {
    text_matches(&token.text_form(), terms)
}

fn entry_matches(entry: &Entry, terms: &[&str]) -> bool {
    match entry {
        Entry::Token(t) => token_matches(t, terms),
        Entry::Row(tokens) => tokens.iter().any(|t| token_matches(t, terms)),
    }
}

fn value_matches(value: &Value, terms: &[&str]) -> bool {
    match value {
        Value::Scalar(t) => token_matches(t, terms),
        collection => collection.tokens().any(|t| token_matches(t, terms)),
    }
}

/// Decide survival from a match result under the given mode.
fn survives(matched: bool, mode: FilterMode) -> bool {
    match mode {
        FilterMode::Include => matched,
        FilterMode::Exclude => !matched,
    }
}

/// Filter a sequence of entries by substring terms.
///
/// Nested rows are treated as a match when *any* of their fields contains
/// *any* term; there is no per-field partial survival — the row stays or
/// goes as a whole.
///
/// # Examples
///
/// ```
/// use genonto_core::{filter_sequence, Entry, FilterMode, Token};
///
/// let samples: Vec<Entry> = ["AAA-LOW", "BBB-HIGH", "CCC-LOW"]
///     .iter()
///     .map(|s| Entry::Token(Token::from(*s)))
///     .collect();
/// let kept = filter_sequence(&samples, &["LOW"], FilterMode::Exclude);
/// assert_eq!(kept, vec![Entry::Token(Token::from("BBB-HIGH"))]);
/// ```
pub fn filter_sequence(items: &[Entry], terms: &[&str], mode: FilterMode) -> Vec<Entry> {
    items
        .iter()
        .filter(|entry| survives(entry_matches(entry, terms), mode))
        .cloned()
        .collect()
}

/// Filter a mapping by substring terms against keys or values.
///
/// With `FilterTarget::Value`, scalar values are tested on their text form;
/// list and set values are treated as a match when any element contains any
/// term ("does this gene's value collection intersect the term set, by
/// substring"). Surviving entries keep their original key order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use genonto_core::{filter_mapping, FilterMode, FilterTarget, Mapping, Token, Value};
///
/// let mut genes = Mapping::new();
/// genes.insert(
///     "TP53".to_string(),
///     Value::Set(BTreeSet::from([Token::from("GO:0001"), Token::from("GO:0002")])),
/// );
/// genes.insert(
///     "BRCA1".to_string(),
///     Value::Set(BTreeSet::from([Token::from("GO:0003")])),
/// );
///
/// let hits = filter_mapping(&genes, &["GO:0001"], FilterTarget::Value, FilterMode::Include);
/// assert_eq!(hits.len(), 1);
/// assert!(hits.contains_key("TP53"));
/// ```
pub fn filter_mapping(
    map: &Mapping,
    terms: &[&str],
    target: FilterTarget,
    mode: FilterMode,
) -> Mapping {
    map.iter()
        .filter(|(key, value)| {
            let matched = match target {
                FilterTarget::Key => text_matches(key, terms),
                FilterTarget::Value => value_matches(value, terms),
            };
            survives(matched, mode)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
