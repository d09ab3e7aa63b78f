//! Aggregate counters for one scan run
//!
//! All three counters live behind a single lock. Splitting them across
//! separate locks would let the synthetic "total" keys drift out of sync
//! with the per-extension sums they summarize.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Synthetic map key holding the sum of every other key.
pub const TOTAL_KEY: &str = "total";

#[derive(Debug, Default, Clone)]
struct Counters {
    nbytes: u64,
    file_counts: BTreeMap<String, u64>,
    error_counts: BTreeMap<String, u64>,
}

/// Concurrency-safe accumulator for byte volume, per-extension file counts
/// and per-extension decode-error counts.
#[derive(Debug, Default)]
pub struct ScanCounters {
    inner: Mutex<Counters>,
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bytes(&self, size: u64) {
        let mut counters = self.inner.lock().unwrap();
        counters.nbytes += size;
    }

    pub fn add_file(&self, extension: &str) {
        let mut counters = self.inner.lock().unwrap();
        *counters.file_counts.entry(TOTAL_KEY.to_string()).or_insert(0) += 1;
        *counters.file_counts.entry(extension.to_string()).or_insert(0) += 1;
    }

    pub fn add_error(&self, extension: &str) {
        let mut counters = self.inner.lock().unwrap();
        *counters.error_counts.entry(TOTAL_KEY.to_string()).or_insert(0) += 1;
        *counters.error_counts.entry(extension.to_string()).or_insert(0) += 1;
    }

    /// Snapshot the counters into an immutable report. Called once, after
    /// the discovery streams have fully drained.
    pub fn report(&self) -> ScanReport {
        let counters = self.inner.lock().unwrap();
        ScanReport {
            total_bytes: counters.nbytes,
            file_counts: counters.file_counts.clone(),
            error_counts: counters.error_counts.clone(),
        }
    }
}

/// Final per-extension tallies for one completed scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub total_bytes: u64,
    pub file_counts: BTreeMap<String, u64>,
    pub error_counts: BTreeMap<String, u64>,
}

impl ScanReport {
    pub fn total_files(&self) -> u64 {
        self.file_counts.get(TOTAL_KEY).copied().unwrap_or(0)
    }

    pub fn total_errors(&self) -> u64 {
        self.error_counts.get(TOTAL_KEY).copied().unwrap_or(0)
    }

    pub fn errors_for(&self, extension: &str) -> u64 {
        self.error_counts.get(extension).copied().unwrap_or(0)
    }

    /// Every seen extension, sorted, without the synthetic total key.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, u64)> {
        self.file_counts
            .iter()
            .filter(|(key, _)| key.as_str() != TOTAL_KEY)
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// A run succeeded iff not a single decode error was recorded.
    pub fn succeeded(&self) -> bool {
        self.total_errors() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_track_per_extension_sums() {
        let counters = ScanCounters::new();
        counters.add_file(".json");
        counters.add_file(".json");
        counters.add_file(".yaml");
        counters.add_error(".yaml");

        let report = counters.report();
        assert_eq!(report.total_files(), 3);
        assert_eq!(report.total_errors(), 1);

        let per_ext_files: u64 = report.extensions().map(|(_, n)| n).sum();
        assert_eq!(report.total_files(), per_ext_files);

        let per_ext_errors: u64 = report
            .error_counts
            .iter()
            .filter(|(key, _)| key.as_str() != TOTAL_KEY)
            .map(|(_, n)| *n)
            .sum();
        assert_eq!(report.total_errors(), per_ext_errors);
    }

    #[test]
    fn test_bytes_accumulate() {
        let counters = ScanCounters::new();
        counters.add_bytes(100);
        counters.add_bytes(28);
        assert_eq!(counters.report().total_bytes, 128);
    }

    #[test]
    fn test_empty_run_is_a_success() {
        let report = ScanCounters::new().report();
        assert_eq!(report.total_files(), 0);
        assert!(report.succeeded());
    }

    #[test]
    fn test_concurrent_updates_stay_consistent() {
        use std::sync::Arc;
        let counters = Arc::new(ScanCounters::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counters = Arc::clone(&counters);
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.add_file(".json");
                    counters.add_error(".json");
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let report = counters.report();
        assert_eq!(report.total_files(), 8000);
        assert_eq!(report.file_counts[".json"], 8000);
        assert_eq!(report.total_errors(), 8000);
    }
}
