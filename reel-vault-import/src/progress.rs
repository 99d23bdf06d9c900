//! Import progress reporting.

use crate::pipeline::ImportStats;

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called before each winning decision is processed.
    fn on_file(&self, current: usize, total: usize, path: &str);

    /// Called when a file is committed to the catalog.
    fn on_imported(&self, path: &str);

    /// Called when the pipeline rejects a decision it was still considering
    /// (duplicate, unmatched, placement or catalog failure). Decisions that
    /// arrive already rejected are not reported here.
    fn on_rejected(&self, path: &str, reason: &str);

    /// Called when the batch is complete.
    fn on_complete(&self, stats: &ImportStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _: usize, _: usize, _: &str) {}
    fn on_imported(&self, _: &str) {}
    fn on_rejected(&self, _: &str, _: &str) {}
    fn on_complete(&self, _: &ImportStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, path: &str) {
        log::info!("  [{}/{}] {}", current, total, path);
    }

    fn on_imported(&self, path: &str) {
        log::info!("Imported {}", path);
    }

    fn on_rejected(&self, path: &str, reason: &str) {
        log::info!("Rejected {}: {}", path, reason);
    }

    fn on_complete(&self, stats: &ImportStats) {
        log::info!(
            "Import complete: {} of {} decisions imported",
            stats.imported,
            stats.total
        );
    }
}
