//! Shared support for the semantic annotation client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod definition;

use semantic_annotation::serializer::ntriples;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Checks an N-Triples subject given on the command line.
///
/// # Errors
///
/// Returns a message if `s` is neither an absolute IRI nor a `_:label`
/// blank node.
pub fn parse_subject(s: &str) -> Result<String, String> {
    if ntriples::is_subject(s) {
        Ok(s.to_owned())
    } else {
        Err(format!(
            "`{s}` is not an absolute IRI or a `_:label` blank node"
        ))
    }
}
