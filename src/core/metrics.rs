//! Logger metrics for observability
//!
//! Write failures never reach the code that logged; these counters are how
//! an application notices a sink that has stopped working.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger dispatch
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_write();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.writes(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that passed the logger level gate
    records_built: AtomicU64,

    /// Records dropped by the logger-wide filter
    records_suppressed: AtomicU64,

    /// Successful handler writes
    writes: AtomicU64,

    /// Handler writes that returned an error or panicked
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            records_built: AtomicU64::new(0),
            records_suppressed: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_built(&self) -> u64 {
        self.records_built.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_suppressed(&self) -> u64 {
        self.records_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Returns the previous count, like the other `record_*` methods
    #[inline]
    pub fn record_built(&self) -> u64 {
        self.records_built.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.records_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write(&self) -> u64 {
        self.writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage of all handler writes (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.writes() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.records_built.store(0, Ordering::Relaxed);
        self.records_suppressed.store(0, Ordering::Relaxed);
        self.writes.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            records_built: AtomicU64::new(self.records_built()),
            records_suppressed: AtomicU64::new(self.records_suppressed()),
            writes: AtomicU64::new(self.writes()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.records_built(), 0);
        assert_eq!(metrics.records_suppressed(), 0);
        assert_eq!(metrics.writes(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_built(), 0);
        assert_eq!(metrics.record_built(), 1);
        assert_eq!(metrics.records_built(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_write();
        }
        for _ in 0..10 {
            metrics.record_write_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_built();
        metrics.record_suppressed();
        metrics.record_write();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.records_built(), 0);
        assert_eq!(metrics.writes(), 0);
        assert_eq!(snapshot.records_built(), 1);
        assert_eq!(snapshot.records_suppressed(), 1);
        assert_eq!(snapshot.writes(), 1);
    }
}
