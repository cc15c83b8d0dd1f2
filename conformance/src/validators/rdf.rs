//! N-Triples validator.
//!
//! Validates that every `*.nt` artifact is well-formed RDF 1.1 N-Triples:
//! - The file parses with a conforming N-Triples parser
//! - The file is non-empty
//! - Every triple line ends with `" ."`

use std::path::Path;

use anyhow::{Context, Result};
use sophia_api::source::TripleSource;
use sophia_api::term::SimpleTerm;
use sophia_turtle::parser::nt;

use super::files_with_extension;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/rdf";

/// Validates every N-Triples artifact under `artifacts`.
///
/// # Errors
///
/// Returns an error if an artifact file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let files = files_with_extension(artifacts, "nt");
    if files.is_empty() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("No .nt artifacts found in {}", artifacts.display()),
        ));
        return Ok(report);
    }

    for path in files {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        check_ntriples(&path.display().to_string(), &content, &mut report);
    }

    Ok(report)
}

/// Checks one N-Triples document.
pub fn check_ntriples(name: &str, content: &str, report: &mut ConformanceReport) {
    let parsed: Result<Vec<[SimpleTerm<'static>; 3]>, String> = nt::parse_str(content)
        .collect_triples()
        .map_err(|e| e.to_string());

    match parsed {
        Ok(triples) if triples.is_empty() => {
            report.push(TestResult::fail(VALIDATOR, format!("{name}: no triples")));
        }
        Ok(triples) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} is valid N-Triples ({} triples)", triples.len()),
            ));
        }
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{name} does not parse as N-Triples: {e}"),
            ));
        }
    }

    let malformed_lines: Vec<String> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#') && !trimmed.ends_with(" .")
        })
        .map(|(i, _)| format!("line {}: does not end with \" .\"", i + 1))
        .take(10)
        .collect();

    if !malformed_lines.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name} has malformed lines"),
            malformed_lines,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantic_annotation::serializer::ntriples::to_ntriples;
    use semantic_annotation::vocab::metadata::SoftwareMetadataDocument;

    fn failures(content: &str) -> usize {
        let mut report = ConformanceReport::new();
        check_ntriples("doc.nt", content, &mut report);
        report.failure_count()
    }

    #[test]
    fn serialized_metadata_parses() {
        let doc = SoftwareMetadataDocument::sample().to_json_ld().unwrap();
        let nt = to_ntriples(&doc, Some("https://example.org/gustfront"));
        assert_eq!(failures(&nt), 0);
    }

    #[test]
    fn blank_subject_parses() {
        let doc = semantic_annotation::vocab::wind::reference_observation().unwrap();
        assert_eq!(failures(&to_ntriples(&doc, None)), 0);
    }

    #[test]
    fn empty_document_fails() {
        assert_eq!(failures(""), 1);
    }

    #[test]
    fn unterminated_triple_fails() {
        let content = "<https://example.org/s> <https://example.org/p> \"o\"\n";
        assert_eq!(failures(content), 2);
    }
}
