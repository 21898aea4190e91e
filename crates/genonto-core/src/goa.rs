//! GOA/GAF (Gene Ontology Annotation) indexing.
//!
//! GAF files open with a run of `!` comment lines, then carry one
//! tab-delimited annotation per line: the gene symbol in column 2, the GO ID
//! in column 4, and a `|`-separated synonym list in column 10. Annotations
//! for one gene are grouped into a set of GO-ID tokens, and each gene's
//! synonyms are indexed with the same set so lookups by either name resolve.

use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::collections::{BTreeSet, HashMap};

use crate::error::{GenontoError, Result};
use crate::types::{Mapping, Token, Value};

/// Minimum column count of a GAF annotation line (through the synonym
/// column).
const GAF_MIN_COLUMNS: usize = 11;

/// Build the full gene → GO-ID-set mapping from GAF text.
///
/// Repeated lines for a gene extend its set. The synonym list is taken from
/// the line where the gene first appears; every synonym maps to the gene's
/// complete, final ID set and is inserted right after its main gene, so the
/// serialized order reads main gene, its synonyms, next main gene, and so
/// on. Empty synonym tokens are skipped.
pub fn parse_annotations(text: &str) -> Result<Mapping> {
    let mut ids: HashMap<String, BTreeSet<Token>> = HashMap::new();
    let mut order: Vec<(String, Vec<String>)> = Vec::new();
    let mut in_header = true;

    for (idx, line) in text.lines().enumerate() {
        if in_header && line.starts_with('!') {
            continue;
        }
        in_header = false;

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < GAF_MIN_COLUMNS {
            return Err(GenontoError::Format {
                line: idx + 1,
                message: format!(
                    "GAF line has {} columns, expected at least {}",
                    cols.len(),
                    GAF_MIN_COLUMNS
                ),
            });
        }
        let gene = cols[2];
        let go_id = Token::from(cols[4]);

        match ids.entry(gene.to_string()) {
            Occupied(mut seen) => {
                seen.get_mut().insert(go_id);
            }
            Vacant(slot) => {
                let synonyms = cols[10]
                    .split('|')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                order.push((gene.to_string(), synonyms));
                slot.insert(BTreeSet::from([go_id]));
            }
        }
    }

    let mut map = Mapping::new();
    for (gene, synonyms) in order {
        let set = &ids[&gene];
        map.insert(gene.clone(), Value::Set(set.clone()));
        for synonym in synonyms {
            map.insert(synonym, Value::Set(set.clone()));
        }
    }
    Ok(map)
}

/// Look up the GO-ID sets for a chosen set of genes. Genes absent from the
/// annotation mapping are silently omitted — a miss is not an error.
pub fn select_annotations(genes: &BTreeSet<String>, annotations: &Mapping) -> Mapping {
    let mut selected = Mapping::new();
    for gene in genes {
        if let Some(value) = annotations.get(gene) {
            selected.insert(gene.clone(), value.clone());
        }
    }
    selected
}
