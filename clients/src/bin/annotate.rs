//! `annotate` — Projects a payload through a signature definition.
//!
//! Reads a TOML signature definition and a JSON payload, binds the
//! signature, projects the payload, and prints the result to stdout.
//!
//! **Usage:**
//! ```
//! annotate --signature <file.toml> --payload <file.json> [--format jsonld|ntriples] [--subject <iri>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use semantic_annotation::serializer::{jsonld, ntriples};
use semantic_annotation::Payload;
use semantic_annotation_clients::definition::SignatureDefinition;
use tracing::info;

/// Output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// JSON-LD document with `@context`.
    Jsonld,
    /// N-Triples, one triple per line.
    Ntriples,
}

/// Project a payload through an annotated signature.
#[derive(Parser)]
#[command(
    name = "annotate",
    about = "Project a JSON payload as JSON-LD through an annotated signature"
)]
struct Args {
    /// TOML signature definition.
    #[arg(long)]
    signature: PathBuf,

    /// JSON object holding one value per bound field.
    #[arg(long)]
    payload: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Jsonld)]
    format: Format,

    /// Subject for N-Triples output: an absolute IRI or a `_:label` blank
    /// node (default: a blank node).
    #[arg(long, value_parser = semantic_annotation_clients::parse_subject)]
    subject: Option<String>,
}

fn main() -> Result<()> {
    semantic_annotation_clients::init_logging();
    let args = Args::parse();

    let text = fs::read_to_string(&args.signature)
        .with_context(|| format!("Failed to read {}", args.signature.display()))?;
    let definition = SignatureDefinition::from_toml(&text)
        .with_context(|| format!("Failed to parse {}", args.signature.display()))?;
    let registry = definition
        .registry()
        .with_context(|| format!("Failed to bind signature `{}`", definition.function))?;
    info!(
        function = %definition.function,
        fields = registry.signature().len(),
        "loaded signature"
    );

    let raw = fs::read_to_string(&args.payload)
        .with_context(|| format!("Failed to read {}", args.payload.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as JSON", args.payload.display()))?;
    let payload = Payload::from_value(value)?;

    let doc = registry
        .project(&payload)
        .with_context(|| format!("Failed to project {}", args.payload.display()))?;

    match args.format {
        Format::Jsonld => {
            let out = jsonld::to_json_ld_string(&doc).context("Failed to serialize JSON-LD")?;
            println!("{out}");
        }
        Format::Ntriples => print!("{}", ntriples::to_ntriples(&doc, args.subject.as_deref())),
    }
    Ok(())
}
