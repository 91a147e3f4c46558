use serde::{Serialize, Deserialize};

use crate::classify::ClassificationResult;
use super::stats::BatchStats;

/// Configuration options for batch classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Maximum number of rows to classify
    pub max_rows: Option<usize>,

    /// Number of parallel threads to use for classification
    pub parallel_threads: Option<usize>,

    /// Whether to draw a progress bar for larger batches
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_rows: None,
            parallel_threads: None,
            show_progress: true,
        }
    }
}

/// Result of a batch classification run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// One result per input row, in input order
    pub results: Vec<ClassificationResult>,

    /// Statistics about the run
    pub stats: BatchStats,
}
