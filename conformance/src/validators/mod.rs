//! Validators over projected artifacts and the bundled signatures.

pub mod jsonld;
pub mod rdf;
pub mod signature;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Files under `dir` with the given extension, sorted by path.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().map(|x| x == extension).unwrap_or(false))
        .collect();
    files.sort();
    files
}
