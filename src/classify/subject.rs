use super::types::CompanyRecord;

/// Subject lines keyed by playbook label. Checked in this order; the first
/// label contained in the playbook type wins.
const SUBJECT_LINES: &[(&str, &str)] = &[
    ("Milestone - Series B/C Scaling", "Your Series B just made RevOps your #1 bottleneck"),
    ("Milestone - Late-Stage Scaling", "At your scale, every process breaks twice"),
    ("Practitioner - Head of Growth", "Your experimentation backlog is growing faster than insights"),
    ("Practitioner - VP Revenue Ops", "Your attribution model can't answer the board's questions"),
    ("Sector - HealthTech", "Healthcare compliance is slowing your product velocity"),
    ("Sector - FinTech", "Every new regulation adds 3 months to your roadmap"),
];

/// Subject used when no tailored line exists for the playbook
pub fn fallback_subject(company_name: &str) -> String {
    format!("Your {} growth is outpacing your operations", company_name)
}

/// Generate the first-touch email subject line for a company and its playbook label
pub fn generate_email_subject(record: &CompanyRecord, playbook_type: &str) -> String {
    SUBJECT_LINES
        .iter()
        .find(|(label, _)| playbook_type.contains(label))
        .map(|(_, subject)| subject.to_string())
        .unwrap_or_else(|| fallback_subject(&record.company_name))
}
