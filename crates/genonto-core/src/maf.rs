//! MAF (Mutation Annotation Format) extraction.
//!
//! MAF files are tab-delimited with an arbitrary run of `#` comment lines,
//! then one header line of column titles, then one record per line. Nothing
//! is validated beyond that shape: a record is just the text of the columns
//! the caller asked for.

use std::collections::BTreeSet;

use crate::error::{GenontoError, Result};
use crate::types::{Entry, Mapping, Token, Value};

/// Default extraction columns: Hugo_Symbol, HGVSc, HGVSp, VARIANT_CLASS,
/// IMPACT — gene name, DNA-level change, protein-level change, mutation
/// class, and predicted impact.
pub const DEFAULT_SAMPLE_COLUMNS: [usize; 5] = [0, 34, 35, 95, 93];

/// Skip leading `#` comment lines.
fn data_lines(text: &str) -> Vec<&str> {
    text.lines().skip_while(|l| l.starts_with('#')).collect()
}

/// Extract sample records from MAF text.
///
/// `start` skips that many data rows, `limit` caps how many are taken
/// (`None`, or anything past the end, means "through the last row"), and
/// `columns` picks the fields of each record in the given order — see
/// [`DEFAULT_SAMPLE_COLUMNS`] and [`column_index`] for choosing them.
///
/// Field text is kept verbatim as text tokens; coercion only happens on the
/// decode side of a round-trip. A column index past a row's field count is
/// a [`GenontoError::Column`] for that record.
pub fn parse_samples(
    text: &str,
    limit: Option<usize>,
    start: usize,
    columns: &[usize],
) -> Result<Vec<Entry>> {
    let lines = data_lines(text);
    if lines.is_empty() {
        return Err(GenontoError::Format {
            line: 1,
            message: "MAF input has no header line after comments".to_string(),
        });
    }
    let rows = &lines[1..];

    let available = rows.len().saturating_sub(start);
    let take = limit.map_or(available, |l| l.min(available));

    let mut samples = Vec::with_capacity(take);
    for (offset, row) in rows.iter().skip(start).take(take).enumerate() {
        let record = start + offset + 1;
        let fields: Vec<&str> = row.trim().split('\t').collect();
        let mut sample = Vec::with_capacity(columns.len());
        for &index in columns {
            let field = fields.get(index).ok_or(GenontoError::Column {
                record,
                index,
                len: fields.len(),
            })?;
            sample.push(Token::from(*field));
        }
        samples.push(Entry::Row(sample));
    }
    Ok(samples)
}

/// Map each column title of a MAF header to its position, so callers can
/// pick extraction columns by name.
pub fn column_index(text: &str) -> Result<Mapping> {
    let lines = data_lines(text);
    let header = lines.first().ok_or_else(|| GenontoError::Format {
        line: 1,
        message: "MAF input has no header line after comments".to_string(),
    })?;

    let mut index = Mapping::new();
    for (i, title) in header.trim().split('\t').enumerate() {
        index.insert(title.to_string(), Value::Scalar(Token::Int(i as i64)));
    }
    Ok(index)
}

/// Collect the unique gene symbols found at `gene_index` across sample
/// records. A bare token entry counts as a one-field record, so only
/// `gene_index == 0` can address it.
pub fn unique_genes(samples: &[Entry], gene_index: usize) -> Result<BTreeSet<String>> {
    let mut genes = BTreeSet::new();
    for (i, entry) in samples.iter().enumerate() {
        let record = i + 1;
        let gene = match entry {
            Entry::Row(tokens) => tokens.get(gene_index).ok_or(GenontoError::Column {
                record,
                index: gene_index,
                len: tokens.len(),
            })?,
            Entry::Token(token) if gene_index == 0 => token,
            Entry::Token(_) => {
                return Err(GenontoError::Column {
                    record,
                    index: gene_index,
                    len: 1,
                })
            }
        };
        genes.insert(gene.text_form().into_owned());
    }
    Ok(genes)
}
