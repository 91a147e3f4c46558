use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;

/// Batches at or below this size run without a progress bar
const PROGRESS_THRESHOLD: usize = 10;

/// Progress tracker for displaying progress during classification
#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker {
    enabled: bool,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    /// Create a new progress tracker that draws for large batches
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self { enabled: false }
    }

    /// Whether a bar would be drawn for `len` items
    pub fn shows_bar_for(&self, len: usize) -> bool {
        self.enabled && len > PROGRESS_THRESHOLD
    }

    /// Map items in parallel, keeping input order in the output
    pub fn track_parallel_progress<T, F, R>(&self, items: &[T], operation: F) -> Vec<R>
    where
        T: Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        let progress_bar = if self.shows_bar_for(items.len()) {
            let pb = ProgressBar::new(items.len() as u64);
            match ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} companies ({eta})")
            {
                Ok(style) => pb.set_style(style.progress_chars("#>-")),
                Err(e) => warn!("Invalid progress bar template: {}", e),
            }
            Some(pb)
        } else {
            None
        };

        let processed_count = AtomicUsize::new(0);

        let results: Vec<R> = items.par_iter()
            .map(|item| {
                let result = operation(item);

                let current_count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(pb) = &progress_bar {
                    pb.set_position(current_count as u64);
                }

                result
            })
            .collect();

        if let Some(pb) = progress_bar {
            pb.finish_with_message("Classification complete");
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let items: Vec<usize> = (0..100).collect();
        let doubled = ProgressTracker::hidden().track_parallel_progress(&items, |n| n * 2);
        assert_eq!(doubled, (0..100).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_bar_only_for_large_batches() {
        let tracker = ProgressTracker::new();
        assert!(!tracker.shows_bar_for(10));
        assert!(tracker.shows_bar_for(11));
        assert!(!ProgressTracker::hidden().shows_bar_for(105));
    }
}
