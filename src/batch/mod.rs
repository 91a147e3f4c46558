mod file_collector;
mod processor;
mod progress;
mod stats;
mod types;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use processor::BatchProcessor;
pub use progress::ProgressTracker;
pub use stats::BatchStats;
pub use types::{BatchOptions, BatchResult};
