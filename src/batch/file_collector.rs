use std::path::{Path, PathBuf};
use anyhow::{bail, Result};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::utils::file_utils;

/// File collector for finding company sheets in a directory
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new file collector that picks up `.csv` files
    pub fn new() -> Self {
        Self {
            valid_extensions: vec!["csv".to_string()],
        }
    }

    /// Collect all files with valid extensions under the input directory, sorted by path
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            bail!("Not a directory: {}", input_dir.display());
        }

        let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.valid_extensions.iter().any(|ext| file_utils::has_extension(e.path(), ext)))
            .map(|e| {
                trace!("Found file: {}", e.path().display());
                e.into_path()
            })
            .collect();

        // Stable ordering keeps output rows and source hashes reproducible
        files.sort();

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }
}
