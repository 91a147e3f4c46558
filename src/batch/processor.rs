use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::classify::{ClassificationEngine, CompanyRecord};
use crate::dataset::RecordReader;
use super::file_collector::FileCollector;
use super::progress::ProgressTracker;
use super::stats::BatchStats;
use super::types::{BatchOptions, BatchResult};

/// Batch processor that reads company sheets and classifies every row
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Configuration options for processing
    options: BatchOptions,

    /// Classifier applied to every row
    engine: ClassificationEngine,

    /// CSV reader for company sheets
    reader: RecordReader,

    /// File collector for directory inputs
    file_collector: FileCollector,

    /// Progress display for parallel classification
    progress_tracker: ProgressTracker,
}

impl BatchProcessor {
    /// Create a new batch processor with the given options
    pub fn new(options: BatchOptions) -> Self {
        let progress_tracker = if options.show_progress {
            ProgressTracker::new()
        } else {
            ProgressTracker::hidden()
        };

        Self {
            options,
            engine: ClassificationEngine::new(),
            reader: RecordReader::new(),
            file_collector: FileCollector::new(),
            progress_tracker,
        }
    }

    /// Replace the CSV reader, e.g. to use a different delimiter
    pub fn with_reader(mut self, reader: RecordReader) -> Self {
        self.reader = reader;
        self
    }

    /// Classify already-loaded records
    pub fn process_records(&self, records: &[CompanyRecord]) -> Result<BatchResult> {
        info!("Classifying {} companies", records.len());

        // Limit the number of rows if configured
        let records = match self.options.max_rows {
            Some(max_rows) if records.len() > max_rows => {
                warn!("Limiting to {} rows out of {}", max_rows, records.len());
                &records[..max_rows]
            }
            _ => records,
        };

        let thread_count = self.options.parallel_threads.unwrap_or_else(|| {
            let available = num_cpus::get();
            let used = std::cmp::max(1, available.saturating_sub(1));
            debug!("Using {} threads for classification (available: {})", used, available);
            used
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .context("Failed to build classification thread pool")?;

        let results = pool.install(|| {
            self.progress_tracker.track_parallel_progress(records, |record| self.engine.classify(record))
        });

        let stats = BatchStats::from_results(&results);
        info!(
            "Classified {} companies into {} playbooks",
            stats.total_rows,
            stats.playbooks.len()
        );

        Ok(BatchResult { results, stats })
    }

    /// Read and classify a single CSV file
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<BatchResult> {
        let records = self.reader.read_file(path)?;
        self.process_records(&records)
    }

    /// Read every CSV file in order and classify all rows as one batch
    pub fn process_files(&self, files: &[PathBuf]) -> Result<BatchResult> {
        info!("Reading {} company sheets", files.len());

        let mut records = Vec::new();
        for file in files {
            records.extend(self.reader.read_file(file)?);
        }

        self.process_records(&records)
    }

    /// Collect CSV files under a directory and classify them as one batch
    pub fn process_directory(&self, input_dir: impl AsRef<Path>) -> Result<(Vec<PathBuf>, BatchResult)> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        let files = self.file_collector.collect_files(input_dir)?;
        if files.is_empty() {
            warn!("No CSV files found in {}", input_dir.display());
        }

        let result = self.process_files(&files)?;
        Ok((files, result))
    }

    /// Classify a file or every CSV file in a directory. Returns the sheets read.
    pub fn process_path(&self, input: impl AsRef<Path>) -> Result<(Vec<PathBuf>, BatchResult)> {
        let input = input.as_ref();
        if input.is_dir() {
            self.process_directory(input)
        } else {
            let result = self.process_file(input)?;
            Ok((vec![input.to_path_buf()], result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PlaybookType;

    fn records(count: usize) -> Vec<CompanyRecord> {
        (0..count)
            .map(|i| CompanyRecord::new(format!("Company {}", i), "Series A", "", ""))
            .collect()
    }

    #[test]
    fn test_max_rows_limits_batch() -> Result<()> {
        let processor = BatchProcessor::new(BatchOptions {
            max_rows: Some(3),
            parallel_threads: Some(2),
            show_progress: false,
        });

        let batch = processor.process_records(&records(10))?;

        assert_eq!(batch.results.len(), 3);
        assert_eq!(batch.stats.total_rows, 3);
        assert_eq!(batch.stats.count_for(PlaybookType::SeriesAGrowth), 3);
        Ok(())
    }

    #[test]
    fn test_parallel_results_keep_input_order() -> Result<()> {
        let processor = BatchProcessor::new(BatchOptions {
            parallel_threads: Some(4),
            show_progress: false,
            ..BatchOptions::default()
        });

        let batch = processor.process_records(&records(105))?;

        for (i, result) in batch.results.iter().enumerate() {
            assert_eq!(result.company_name, format!("Company {}", i));
        }
        Ok(())
    }

    #[test]
    fn test_empty_batch() -> Result<()> {
        let batch = BatchProcessor::new(BatchOptions { show_progress: false, ..BatchOptions::default() })
            .process_records(&[])?;
        assert!(batch.results.is_empty());
        assert_eq!(batch.stats.total_rows, 0);
        Ok(())
    }
}
