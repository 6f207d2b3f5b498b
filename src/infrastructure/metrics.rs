//! Ingest metrics for the soak harness
//!
//! Lock-free counters using atomic operations. Updated by consumer
//! threads, snapshotted for the final report.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Ingest counters
///
/// Thread-safe counters updated while batches are drained.
/// Snapshots taken for reporting.
pub struct IngestMetrics {
    /// Total batches absorbed
    batches: AtomicU64,
    /// Total records absorbed
    records: AtomicU64,
    /// Start time for rate calculation
    start_time: Instant,
}

/// Metrics snapshot for reporting
#[derive(Debug, Clone, Copy)]
pub struct IngestSnapshot {
    pub batches: u64,
    pub records: u64,
    pub records_per_sec: f64,
    pub uptime_seconds: u64,
}

impl IngestMetrics {
    pub fn new() -> Self {
        Self {
            batches: AtomicU64::new(0),
            records: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record one absorbed batch of `records` records
    #[inline]
    pub fn record_batch(&self, records: u64) {
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_add(records, Ordering::Relaxed);
    }

    /// Take a snapshot of the counters
    pub fn snapshot(&self) -> IngestSnapshot {
        let elapsed = self.start_time.elapsed();
        let records = self.records.load(Ordering::Relaxed);
        let records_per_sec = if elapsed.as_secs_f64() > 0.0 {
            records as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        IngestSnapshot {
            batches: self.batches.load(Ordering::Relaxed),
            records,
            records_per_sec,
            uptime_seconds: elapsed.as_secs(),
        }
    }
}

impl Default for IngestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_batch_accumulates() {
        let metrics = IngestMetrics::new();
        metrics.record_batch(16);
        metrics.record_batch(16);
        metrics.record_batch(3);

        let snap = metrics.snapshot();
        assert_eq!(snap.batches, 3);
        assert_eq!(snap.records, 35);
    }

    #[test]
    fn test_concurrent_counting() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(IngestMetrics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_batch(2);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snap = metrics.snapshot();
        assert_eq!(snap.batches, 400);
        assert_eq!(snap.records, 800);
    }
}
