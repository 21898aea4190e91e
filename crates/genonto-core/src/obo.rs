//! OBO ontology parsing and retrieval.
//!
//! An OBO document is a series of blank-line-delimited stanzas. Only
//! `[Term]` stanzas matter here: the line after the marker is `id: GO:...`,
//! the one after that is `name: ...`. Everything else (headers, `[Typedef]`
//! stanzas, trailing term attributes) is ignored.
//!
//! Retrieval is a single blocking GET with no timeout or retry; a transport
//! failure or error status is fatal to the whole pipeline.

use crate::error::{GenontoError, Result};
use crate::types::{Mapping, Token, Value};

/// The canonical full Gene Ontology OBO resource.
pub const DEFAULT_OBO_URL: &str = "http://current.geneontology.org/ontology/go.obo";

/// Extract every GO ID → term-name pair from OBO text.
///
/// A `[Term]` stanza missing its `id: ` or `name: ` line is a
/// [`GenontoError::Format`] pointing at the offending line.
pub fn parse_ontology(text: &str) -> Result<Mapping> {
    let mut terms = Mapping::new();
    let mut line_no = 1usize;

    for stanza in text.split("\n\n") {
        let lines: Vec<&str> = stanza.lines().collect();
        if stanza.starts_with("[Term]") {
            let id = field_line(&lines, 1, "id: ", line_no)?;
            let name = field_line(&lines, 2, "name: ", line_no)?;
            terms.insert(id.to_string(), Value::Scalar(Token::from(name)));
        }
        // +1 for the blank separator line.
        line_no += lines.len() + 1;
    }
    Ok(terms)
}

/// Fetch a stanza line at `offset` and strip its expected prefix.
fn field_line<'a>(
    lines: &[&'a str],
    offset: usize,
    prefix: &str,
    stanza_start: usize,
) -> Result<&'a str> {
    lines
        .get(offset)
        .and_then(|l| l.strip_prefix(prefix))
        .ok_or_else(|| GenontoError::Format {
            line: stanza_start + offset,
            message: format!("[Term] stanza is missing its '{}' line", prefix.trim_end()),
        })
}

/// Fetch OBO text over HTTP. One blocking request, all-or-nothing.
pub fn fetch_ontology(url: &str) -> Result<String> {
    let fetch_err = |source| GenontoError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;
    response.text().map_err(fetch_err)
}

/// Resolve each gene's GO IDs to their human-readable terms.
///
/// Every token of a gene's value (scalar, list, or set) is looked up in the
/// ontology mapping; IDs without a known term are skipped. The result maps
/// each gene to a (possibly empty) list of term tokens.
pub fn terms_for_genes(gene_ids: &Mapping, ontology: &Mapping) -> Mapping {
    let mut gene_terms = Mapping::new();
    for (gene, value) in gene_ids {
        let terms: Vec<Token> = value
            .tokens()
            .filter_map(|id| ontology.get(id.text_form().as_ref()))
            .flat_map(|term| term.tokens().cloned())
            .collect();
        gene_terms.insert(gene.clone(), Value::List(terms));
    }
    gene_terms
}
