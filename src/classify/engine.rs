use log::debug;

use super::personas::extract_personas_counted;
use super::playbook::select_playbook;
use super::subject::generate_email_subject;
use super::types::{ClassificationResult, CompanyRecord};
use super::value_props::generate_value_props;

/// Runs every classifier over a company record and assembles the output row.
///
/// The engine holds no state, so one instance can be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassificationEngine;

impl ClassificationEngine {
    /// Create a new classification engine
    pub fn new() -> Self {
        Self
    }

    /// Classify a single company
    pub fn classify(&self, record: &CompanyRecord) -> ClassificationResult {
        let playbook = select_playbook(record);
        let email_subject = generate_email_subject(record, playbook.label());
        let (personas, recognized_personas) = extract_personas_counted(record);

        debug!("Classified {} as {}", record.company_name, playbook);

        ClassificationResult {
            company_name: record.company_name.clone(),
            playbook_type: playbook.label().to_string(),
            playbook_description: playbook.description().to_string(),
            value_props: generate_value_props(record),
            personas,
            email_subject,
            recognized_personas,
        }
    }

    /// Classify a slice of companies sequentially, preserving order
    pub fn classify_all(&self, records: &[CompanyRecord]) -> Vec<ClassificationResult> {
        records.iter().map(|record| self.classify(record)).collect()
    }
}
