//! `annotate-conformance` — Validates built artifacts and the bundled signatures.
//!
//! Runs the conformance suite across:
//! - Bundled signatures (reference document, determinism, duplicate rejection)
//! - JSON-LD artifacts (`@context` shape, orphan fields and bindings)
//! - N-Triples artifacts (RDF 1.1 N-Triples)
//!
//! **Usage:**
//! ```
//! annotate-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use semantic_annotation_conformance::run_all;

/// Run the semantic annotation conformance suite.
#[derive(Parser)]
#[command(
    name = "annotate-conformance",
    about = "Validate semantic annotation artifacts"
)]
struct Args {
    /// Path to the built artifacts directory (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    semantic_annotation_clients::init_logging();
    let args = Args::parse();

    let report = run_all(&args.artifacts)?;

    println!("Semantic Annotation Conformance Report");
    println!("======================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let summary = report.summary();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        summary.passed, summary.warned, summary.failed
    );

    if summary.failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", summary.failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
