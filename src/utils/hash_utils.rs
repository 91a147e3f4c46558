use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use sha2::{Sha256, Digest};
use log::trace;

/// Calculate SHA-256 hash of a string
pub fn hash_string(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fingerprint a set of input files, in the order given.
///
/// Used to tag enrichment reports with the exact source sheets they came from.
pub fn hash_files(paths: &[impl AsRef<Path>]) -> Result<String> {
    let mut hasher = Sha256::new();

    for path in paths {
        let path = path.as_ref();
        trace!("Hashing input file: {}", path.display());
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        hasher.update(&bytes);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
