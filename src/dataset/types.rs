use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Error};
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::batch::BatchStats;
use crate::classify::ClassificationResult;

/// Output formats the writer can produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Infer the format from a file extension, if it is a known one
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Conventional file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(anyhow!("Unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Flat output row, one per classified company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Playbook_Type")]
    pub playbook_type: String,
    #[serde(rename = "Playbook_Description")]
    pub playbook_description: String,
    #[serde(rename = "Value_Prop_1")]
    pub value_prop_1: String,
    #[serde(rename = "Value_Prop_2")]
    pub value_prop_2: String,
    #[serde(rename = "Value_Prop_3")]
    pub value_prop_3: String,
    #[serde(rename = "Persona_1")]
    pub persona_1: String,
    #[serde(rename = "Persona_2")]
    pub persona_2: String,
    #[serde(rename = "Persona_3")]
    pub persona_3: String,
    #[serde(rename = "Email_Subject")]
    pub email_subject: String,
}

impl From<&ClassificationResult> for OutputRow {
    fn from(result: &ClassificationResult) -> Self {
        let [value_prop_1, value_prop_2, value_prop_3] = result.value_props.clone();
        let [persona_1, persona_2, persona_3] = result.personas.clone();
        Self {
            company_name: result.company_name.clone(),
            playbook_type: result.playbook_type.clone(),
            playbook_description: result.playbook_description.clone(),
            value_prop_1,
            value_prop_2,
            value_prop_3,
            persona_1,
            persona_2,
            persona_3,
            email_subject: result.email_subject.clone(),
        }
    }
}

/// Structured report written for JSON and YAML output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Input sheets the results were read from
    pub source_files: Vec<PathBuf>,

    /// SHA-256 over the input sheets, if they were read from disk
    pub source_hash: Option<String>,

    /// Aggregate statistics for the batch
    pub stats: BatchStats,

    /// One result per input row, in input order
    pub results: Vec<ClassificationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("out.csv", Some(OutputFormat::Csv) ; "csv")]
    #[test_case("out.JSON", Some(OutputFormat::Json) ; "json upper")]
    #[test_case("out.yml", Some(OutputFormat::Yaml) ; "yml")]
    #[test_case("out.txt", None ; "unknown")]
    #[test_case("out", None ; "no extension")]
    fn test_format_from_path(path: &str, expected: Option<OutputFormat>) {
        assert_eq!(OutputFormat::from_path(path), expected);
    }

    #[test]
    fn test_unknown_format_is_error() {
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
