use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Serialize, Deserialize};

use crate::batch::BatchOptions;
use crate::dataset::OutputFormat;
use crate::utils::file_utils;

/// Output section of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format; inferred from `path` when unset
    pub format: Option<OutputFormat>,

    /// Where to write the enriched sheet
    pub path: Option<PathBuf>,
}

/// Settings loaded from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub batch: BatchOptions,
    pub output: OutputConfig,
}

impl MapperConfig {
    /// Load a config file. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = file_utils::read_file_to_string(path)?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config")
    }

    /// Resolve the output format: explicit setting, then path extension, then CSV
    pub fn resolved_format(&self) -> OutputFormat {
        self.output.format
            .or_else(|| self.output.path.as_ref().and_then(|path| OutputFormat::from_path(path)))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_config() -> Result<()> {
        let config = MapperConfig::from_toml(
            r#"
            [batch]
            max_rows = 50
            parallel_threads = 4
            show_progress = false

            [output]
            format = "yaml"
            path = "out/enriched.yaml"
            "#,
        )?;

        assert_eq!(
            config.batch,
            BatchOptions {
                max_rows: Some(50),
                parallel_threads: Some(4),
                show_progress: false,
            }
        );
        assert_eq!(config.output.path, Some(PathBuf::from("out/enriched.yaml")));
        assert_eq!(config.resolved_format(), OutputFormat::Yaml);
        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<()> {
        let config = MapperConfig::from_toml("")?;
        assert_eq!(config, MapperConfig::default());
        assert!(config.batch.show_progress);
        assert_eq!(config.resolved_format(), OutputFormat::Csv);
        Ok(())
    }

    #[test]
    fn test_format_inferred_from_path() -> Result<()> {
        let config = MapperConfig::from_toml("[output]\npath = \"report.json\"\n")?;
        assert_eq!(config.resolved_format(), OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_yml_format_name_accepted() -> Result<()> {
        let config = MapperConfig::from_toml("[output]\nformat = \"yml\"\n")?;
        assert_eq!(config.resolved_format(), OutputFormat::Yaml);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(MapperConfig::load("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(MapperConfig::from_toml("[output]\nformat = \"xlsx\"\n").is_err());
    }
}
