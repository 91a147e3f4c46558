use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use csv::WriterBuilder;
use log::{debug, info};

use crate::batch::BatchResult;
use crate::classify::ClassificationResult;
use crate::utils::file_utils;
use super::types::{EnrichmentReport, OutputFormat, OutputRow};

/// Writes classification results in one of the supported output formats
#[derive(Debug, Clone)]
pub struct ResultWriter {
    /// Format to emit
    format: OutputFormat,
}

impl ResultWriter {
    /// Create a writer for the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format this writer emits
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Build the structured report for a batch
    pub fn build_report(
        &self,
        batch: &BatchResult,
        source_files: &[PathBuf],
        source_hash: Option<String>,
    ) -> EnrichmentReport {
        EnrichmentReport {
            generated_at: Utc::now(),
            source_files: source_files.to_vec(),
            source_hash,
            stats: batch.stats.clone(),
            results: batch.results.clone(),
        }
    }

    /// Render a batch to a string in the configured format
    pub fn render(&self, report: &EnrichmentReport) -> Result<String> {
        match self.format {
            OutputFormat::Csv => render_csv(&report.results),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize report as JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize report as YAML"),
        }
    }

    /// Render and write a report to disk
    pub fn write_report(&self, report: &EnrichmentReport, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing {} output to {}", self.format, path.display());

        let content = self.render(report)?;
        file_utils::write_string_to_file(path, &content)?;

        info!("Wrote {} results to {}", report.results.len(), path.display());
        Ok(())
    }
}

/// One CSV row per result, with a header row
fn render_csv(results: &[ClassificationResult]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(results, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

/// Stream results as CSV into any writer
pub fn write_csv<W: Write>(results: &[ClassificationResult], sink: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(sink);

    for result in results {
        writer.serialize(OutputRow::from(result))
            .with_context(|| format!("Failed to write CSV row for {}", result.company_name))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
