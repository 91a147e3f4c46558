use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use crate::classify::types::{
    CompanyRecord, COMPANY_NAME_FIELD, ICP_FIELD, PERSONAS_FIELD, VALUE_PROPOSITION_FIELD,
};

/// Reads company rows from a funding-round CSV export
#[derive(Debug, Clone)]
pub struct RecordReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for RecordReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl RecordReader {
    /// Create a new reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read all company records from a CSV file
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<CompanyRecord>> {
        let path = path.as_ref();
        debug!("Reading companies from {}", path.display());

        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
        let records = self.read_from(file)
            .with_context(|| format!("Failed to read companies from {}", path.display()))?;

        info!("Read {} companies from {}", records.len(), path.display());
        Ok(records)
    }

    /// Read all company records from CSV text
    pub fn read_str(&self, content: &str) -> Result<Vec<CompanyRecord>> {
        self.read_from(content.as_bytes())
    }

    /// Read all company records from any CSV source
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<CompanyRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()
            .context("Failed to read CSV headers")?
            .clone();
        check_headers(&headers)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.with_context(|| format!("Failed to parse CSV row {}", index + 1))?;
            let record: CompanyRecord = row.deserialize(Some(&headers))
                .with_context(|| format!("Failed to decode CSV row {}", index + 1))?;

            if record.company_name.is_empty() {
                warn!("Row {} has an empty company name", index + 1);
            }
            records.push(record);
        }

        Ok(records)
    }
}

/// The company name column is required; the free-text columns may be absent.
fn check_headers(headers: &StringRecord) -> Result<()> {
    let has = |name: &str| headers.iter().any(|header| header == name);

    if !has(COMPANY_NAME_FIELD) {
        bail!("CSV is missing the required '{}' column", COMPANY_NAME_FIELD);
    }

    for optional in [ICP_FIELD, VALUE_PROPOSITION_FIELD, PERSONAS_FIELD] {
        if !has(optional) {
            warn!("CSV has no '{}' column, treating it as empty", optional);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_basic_sheet() -> Result<()> {
        let csv = "Company Name,ICP,Value_Proposition,Personas,Website\n\
                   Acme,Series B SaaS company,Automate your workflow,Head of Growth,acme.io\n\
                   Globex, Hospital networks ,\"Data, analytics and cost\",CMO,globex.com\n";

        let records = RecordReader::new().read_str(csv)?;

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            CompanyRecord::new("Acme", "Series B SaaS company", "Automate your workflow", "Head of Growth")
        );
        assert_eq!(records[1].icp, "Hospital networks");
        assert_eq!(records[1].value_proposition, "Data, analytics and cost");
        Ok(())
    }

    #[test]
    fn test_missing_optional_columns_default_to_empty() -> Result<()> {
        let records = RecordReader::new().read_str("Company Name,ICP\nAcme,Seed stage\n")?;
        assert_eq!(records[0].personas, "");
        assert_eq!(records[0].value_proposition, "");
        Ok(())
    }

    #[test]
    fn test_short_rows_are_tolerated() -> Result<()> {
        let records = RecordReader::new()
            .read_str("Company Name,ICP,Value_Proposition,Personas\nAcme,Seed\n")?;
        assert_eq!(records[0].icp, "Seed");
        assert_eq!(records[0].personas, "");
        Ok(())
    }

    #[test]
    fn test_missing_company_name_column_is_error() {
        let err = RecordReader::new()
            .read_str("Name,ICP\nAcme,Seed\n")
            .unwrap_err();
        assert!(err.to_string().contains("Company Name"));
    }

    #[test]
    fn test_custom_delimiter() -> Result<()> {
        let records = RecordReader::new()
            .with_delimiter(b';')
            .read_str("Company Name;ICP\nAcme;Fintech\n")?;
        assert_eq!(records[0].icp, "Fintech");
        Ok(())
    }
}
