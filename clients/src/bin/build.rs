//! `annotate-build` — Projects the bundled reference documents and writes
//! them to the output directory.
//!
//! **Outputs:**
//! - `<out>/wind-observation.{jsonld,nt}` — the reference wind observation
//! - `<out>/wind-speed-call.{jsonld,nt}` — one annotated `wind_speed` call
//! - `<out>/software-metadata.{jsonld,nt}` — a sample software metadata document
//!
//! **Usage:**
//! ```
//! annotate-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use semantic_annotation_conformance::artifacts;

/// Build the reference annotation artifacts.
#[derive(Parser)]
#[command(name = "annotate-build", about = "Build reference semantic annotation artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    semantic_annotation_clients::init_logging();
    let args = Args::parse();

    let written = artifacts::write_all(&args.out)?;
    for path in &written {
        println!("  Written: {}", path.display());
    }

    println!("Build complete: {} artifacts.", written.len());
    Ok(())
}
