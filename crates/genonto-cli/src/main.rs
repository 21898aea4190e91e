//! `genonto` CLI — drive the MAF → GO-term pipeline from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Show which MAF column holds which attribute
//! genonto index -i mutations.maf
//!
//! # Extract 100 sample records starting at row 40, dropping LOW-impact ones
//! genonto samples -i mutations.maf --limit 100 --start 39 \
//!     --filter LOW --exclude -o samples.txt
//!
//! # Build the gene -> GO-ID mapping, restricted to the sampled genes
//! genonto annotations -i goa_human.gaf --genes-from samples.txt \
//!     --gene-index 0 -o gene_ids.txt
//!
//! # Keep only genes annotated with cytoplasm-related IDs
//! genonto filter -i gene_ids.txt --terms-file cytoplasm_ids.txt \
//!     --target value -o cyto_genes.txt
//!
//! # Resolve GO IDs to terms against a local (or fetched) OBO file
//! genonto terms --annotations cyto_genes.txt --obo go.obo -o gene_terms.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};

use genonto_core::{
    encode_mapping, encode_sequence, filter_mapping, filter_sequence, goa, maf, obo, FilterMode,
    FilterTarget, Mapping,
};

#[derive(Parser)]
#[command(
    name = "genonto",
    version,
    about = "Map MAF mutation records to Gene Ontology terms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map each MAF column title to its position
    Index {
        /// Input MAF file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit JSON instead of `key: value` lines
        #[arg(long)]
        json: bool,
    },
    /// Extract (and optionally filter) sample records from a MAF file
    Samples {
        /// Input MAF file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated column positions to extract
        /// (default: Hugo_Symbol, HGVSc, HGVSp, VARIANT_CLASS, IMPACT)
        #[arg(long)]
        columns: Option<String>,
        /// Maximum number of records to extract
        #[arg(long)]
        limit: Option<usize>,
        /// Number of data rows to skip first
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Comma-separated substring terms to filter records by
        #[arg(long)]
        filter: Option<String>,
        /// Drop matching records instead of keeping them
        #[arg(long)]
        exclude: bool,
    },
    /// Build the gene -> GO-ID mapping from a GAF file
    Annotations {
        /// Input GAF file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Restrict to genes appearing in this saved samples file
        #[arg(long)]
        genes_from: Option<String>,
        /// Column of the samples records holding the gene symbol
        #[arg(long, default_value_t = 0)]
        gene_index: usize,
    },
    /// Resolve a gene -> GO-ID mapping to human-readable terms
    Terms {
        /// Saved gene -> GO-ID mapping file
        #[arg(short, long)]
        annotations: String,
        /// Local OBO file (fetched from --url when omitted)
        #[arg(long)]
        obo: Option<String>,
        /// OBO resource URL (default: the full Gene Ontology)
        #[arg(long)]
        url: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit JSON instead of `key: value` lines
        #[arg(long)]
        json: bool,
    },
    /// Filter a saved mapping file by substring terms
    Filter {
        /// Saved mapping file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated filter terms
        #[arg(long)]
        terms: Option<String>,
        /// Read filter terms from a saved sequence file instead
        #[arg(long)]
        terms_file: Option<String>,
        /// Match against keys or values
        #[arg(long, value_enum, default_value_t = Target::Key)]
        target: Target,
        /// Drop matching entries instead of keeping them
        #[arg(long)]
        exclude: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Key,
    Value,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Target::Key => "key",
            Target::Value => "value",
        })
    }
}

impl From<Target> for FilterTarget {
    fn from(target: Target) -> FilterTarget {
        match target {
            Target::Key => FilterTarget::Key,
            Target::Value => FilterTarget::Value,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            input,
            output,
            json,
        } => {
            let text = read_input(input.as_deref())?;
            let index = maf::column_index(&text).context("Failed to index MAF columns")?;
            write_output(output.as_deref(), &render_mapping(&index, json)?)?;
        }
        Commands::Samples {
            input,
            output,
            columns,
            limit,
            start,
            filter,
            exclude,
        } => {
            let text = read_input(input.as_deref())?;
            let columns = match columns.as_deref() {
                Some(raw) => parse_columns(raw)?,
                None => maf::DEFAULT_SAMPLE_COLUMNS.to_vec(),
            };
            let mut samples = maf::parse_samples(&text, limit, start, &columns)
                .context("Failed to extract MAF samples")?;
            if let Some(raw) = filter {
                let terms = split_terms(&raw);
                let term_refs: Vec<&str> = terms.iter().map(String::as_str).collect();
                samples = filter_sequence(&samples, &term_refs, mode(exclude));
            }
            write_output(output.as_deref(), &encode_sequence(&samples))?;
        }
        Commands::Annotations {
            input,
            output,
            genes_from,
            gene_index,
        } => {
            let text = read_input(input.as_deref())?;
            let annotations =
                goa::parse_annotations(&text).context("Failed to parse GAF annotations")?;
            let selected = match genes_from {
                Some(path) => {
                    let samples = genonto_core::read_sequence(&path, false)
                        .with_context(|| format!("Failed to read samples file: {}", path))?;
                    let genes = maf::unique_genes(&samples, gene_index)
                        .context("Failed to collect gene symbols from samples")?;
                    goa::select_annotations(&genes, &annotations)
                }
                None => annotations,
            };
            write_output(output.as_deref(), &encode_mapping(&selected))?;
        }
        Commands::Terms {
            annotations,
            obo: obo_file,
            url,
            output,
            json,
        } => {
            let gene_ids = genonto_core::read_mapping(&annotations)
                .with_context(|| format!("Failed to read annotation mapping: {}", annotations))?;
            let obo_text = match obo_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read OBO file: {}", path))?,
                None => {
                    let url = url.as_deref().unwrap_or(obo::DEFAULT_OBO_URL);
                    obo::fetch_ontology(url).context("Failed to fetch OBO resource")?
                }
            };
            let ontology =
                obo::parse_ontology(&obo_text).context("Failed to parse OBO ontology")?;
            let gene_terms = obo::terms_for_genes(&gene_ids, &ontology);
            write_output(output.as_deref(), &render_mapping(&gene_terms, json)?)?;
        }
        Commands::Filter {
            input,
            output,
            terms,
            terms_file,
            target,
            exclude,
        } => {
            let terms = build_terms(terms.as_deref(), terms_file.as_deref())?;
            let text = read_input(input.as_deref())?;
            let map =
                genonto_core::decode_mapping(&text).context("Failed to parse mapping input")?;
            let term_refs: Vec<&str> = terms.iter().map(String::as_str).collect();
            let filtered = filter_mapping(&map, &term_refs, target.into(), mode(exclude));
            write_output(output.as_deref(), &encode_mapping(&filtered))?;
        }
    }

    Ok(())
}

fn mode(exclude: bool) -> FilterMode {
    if exclude {
        FilterMode::Exclude
    } else {
        FilterMode::Include
    }
}

fn render_mapping(map: &Mapping, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(map)?)
    } else {
        Ok(encode_mapping(map))
    }
}

/// Split a `--filter`/`--terms` argument on commas, dropping empty parts.
fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect filter terms from `--terms` and/or a saved sequence file.
fn build_terms(terms: Option<&str>, terms_file: Option<&str>) -> Result<Vec<String>> {
    let mut collected = Vec::new();
    if let Some(raw) = terms {
        collected.extend(split_terms(raw));
    }
    if let Some(path) = terms_file {
        let entries = genonto_core::read_sequence(path, true)
            .with_context(|| format!("Failed to read terms file: {}", path))?;
        collected.extend(entries.iter().map(|e| e.to_string()));
    }
    if collected.is_empty() {
        anyhow::bail!("No filter terms given: pass --terms or --terms-file");
    }
    Ok(collected)
}

fn parse_columns(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("Invalid column position: '{}'", s))
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
