//! Semantic annotation conformance suite.
//!
//! Validates projected artifacts and the bundled signatures against the
//! projection contract: every field has exactly one binding, every binding
//! has a field, URIs are absolute, output is deterministic, and rebinding a
//! field is rejected.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Projected documents (`*.jsonld`) | JSON-LD 1.1 `@context` shape, no orphan fields or bindings |
//! | RDF view (`*.nt`) | RDF 1.1 N-Triples |
//! | Bundled signatures | Reference document, determinism, duplicate rejection |
//!
//! Semantic compatibility between URIs is not checked.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use semantic_annotation_conformance::run_all;
//!
//! let report = run_all(Path::new("public")).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod artifacts;
pub mod report;
pub mod validators;

use std::path::Path;

pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all conformance validators over `artifacts` and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Bundled signatures (live library, no file I/O)
/// 2. JSON-LD artifacts
/// 3. N-Triples artifacts
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(artifacts: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::signature::validate());
    report.extend(validators::jsonld::validate(artifacts)?);
    report.extend(validators::rdf::validate(artifacts)?);

    tracing::debug!(
        artifacts = %artifacts.display(),
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}
