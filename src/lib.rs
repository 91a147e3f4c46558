pub mod batch;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod utils;

// Re-export main types and functions for easier access
pub use classify::types::{CompanyRecord, ClassificationResult, PlaybookType, PlaybookCategory};
pub use classify::{
    ClassificationEngine,
    determine_playbook,
    generate_value_props,
    extract_personas,
    generate_email_subject,
};

pub use batch::{BatchProcessor, BatchOptions, BatchResult, BatchStats};
pub use dataset::{RecordReader, ResultWriter, OutputFormat, EnrichmentReport};
pub use config::MapperConfig;

// Re-export utility functions
pub use utils::file_utils;
