use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

use crate::classify::subject::fallback_subject;
use crate::classify::value_props::placeholder_value_prop;
use crate::classify::{ClassificationResult, PlaybookType};

/// Statistics for a classification batch
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Total number of rows classified
    pub total_rows: usize,

    /// Number of rows per playbook label
    pub playbooks: BTreeMap<String, usize>,

    /// Number of rows per playbook category
    pub categories: BTreeMap<String, usize>,

    /// Rows where at least one value prop is the placeholder
    pub padded_value_props: usize,

    /// Rows where fewer than three personas were recognized and defaults filled the rest
    pub padded_personas: usize,

    /// Rows that received the generic subject line
    pub fallback_subjects: usize,
}

impl BatchStats {
    /// Create a new, empty stats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a slice of results
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut stats = Self::new();
        for result in results {
            stats.record(result);
        }
        stats
    }

    /// Add a single result to the tallies
    pub fn record(&mut self, result: &ClassificationResult) {
        self.total_rows += 1;
        *self.playbooks.entry(result.playbook_type.clone()).or_insert(0) += 1;

        if let Some(playbook) = result.playbook() {
            *self.categories.entry(playbook.category().as_str().to_string()).or_insert(0) += 1;
        }

        let placeholder = placeholder_value_prop(&result.company_name);
        if result.value_props.iter().any(|prop| *prop == placeholder) {
            self.padded_value_props += 1;
        }

        if result.recognized_personas < 3 {
            self.padded_personas += 1;
        }

        if result.email_subject == fallback_subject(&result.company_name) {
            self.fallback_subjects += 1;
        }
    }

    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.total_rows += other.total_rows;
        for (label, count) in &other.playbooks {
            *self.playbooks.entry(label.clone()).or_insert(0) += count;
        }
        for (category, count) in &other.categories {
            *self.categories.entry(category.clone()).or_insert(0) += count;
        }
        self.padded_value_props += other.padded_value_props;
        self.padded_personas += other.padded_personas;
        self.fallback_subjects += other.fallback_subjects;
    }

    /// Number of rows mapped to a given playbook
    pub fn count_for(&self, playbook: PlaybookType) -> usize {
        self.playbooks.get(playbook.label()).copied().unwrap_or(0)
    }

    /// Percentage of rows that needed placeholder value props
    pub fn padding_rate(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }

        (self.padded_value_props as f64 / self.total_rows as f64) * 100.0
    }
}
