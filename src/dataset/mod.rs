pub mod types;
pub mod reader;
pub mod writer;

// Re-export main types and functions for easier access
pub use types::{EnrichmentReport, OutputFormat, OutputRow};
pub use reader::RecordReader;
pub use writer::{ResultWriter, write_csv};
