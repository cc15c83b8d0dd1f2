//! Reference artifacts projected from the bundled vocabularies.
//!
//! [`write_all`] renders every reference document as JSON-LD and N-Triples
//! into one directory; the validators then check that directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semantic_annotation::serializer::{jsonld, ntriples};
use semantic_annotation::vocab::{metadata::SoftwareMetadataDocument, wind};
use semantic_annotation::JsonLdDocument;
use tracing::info;

/// A named reference document and the subject its triples describe.
pub struct Artifact {
    /// File stem shared by the `.jsonld` and `.nt` outputs.
    pub stem: &'static str,
    /// Subject IRI for the N-Triples view.
    pub subject: &'static str,
    /// The projected document.
    pub document: JsonLdDocument,
}

/// Projects every reference document.
///
/// # Errors
///
/// Returns an error if a bundled vocabulary fails to project.
pub fn reference_artifacts() -> Result<Vec<Artifact>> {
    Ok(vec![
        Artifact {
            stem: "wind-observation",
            subject: "https://wind-measurement-ontology.foo/examples/observation",
            document: wind::reference_observation().context("Failed to project wind observation")?,
        },
        Artifact {
            stem: "wind-speed-call",
            subject: "https://wind-measurement-ontology.foo/examples/wind-speed-call",
            document: wind::wind_speed_call(3.0, 4.0).context("Failed to project wind_speed call")?,
        },
        Artifact {
            stem: "software-metadata",
            subject: "https://example.org/gustfront",
            document: SoftwareMetadataDocument::sample()
                .to_json_ld()
                .context("Failed to project software metadata")?,
        },
    ])
}

/// Writes every reference artifact into `out`, creating it if needed.
///
/// Returns the written paths in order.
///
/// # Errors
///
/// Returns an error if projection fails or a file cannot be written.
pub fn write_all(out: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let mut written = Vec::new();
    for artifact in reference_artifacts()? {
        let json_path = out.join(format!("{}.jsonld", artifact.stem));
        let json_str = jsonld::to_json_ld_string(&artifact.document)
            .with_context(|| format!("Failed to serialize {} to JSON-LD", artifact.stem))?;
        fs::write(&json_path, json_str)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!(path = %json_path.display(), "wrote JSON-LD artifact");
        written.push(json_path);

        let nt_path = out.join(format!("{}.nt", artifact.stem));
        let nt_str = ntriples::to_ntriples(&artifact.document, Some(artifact.subject));
        fs::write(&nt_path, nt_str)
            .with_context(|| format!("Failed to write {}", nt_path.display()))?;
        info!(path = %nt_path.display(), "wrote N-Triples artifact");
        written.push(nt_path);
    }

    Ok(written)
}
