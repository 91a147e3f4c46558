pub mod types;
pub mod playbook;
pub mod value_props;
pub mod personas;
pub mod subject;
pub mod engine;

// Re-export the main API for easier access
pub use types::{CompanyRecord, ClassificationResult, PlaybookType, PlaybookCategory};
pub use playbook::{determine_playbook, select_playbook};
pub use value_props::generate_value_props;
pub use personas::extract_personas;
pub use subject::generate_email_subject;
pub use engine::ClassificationEngine;
