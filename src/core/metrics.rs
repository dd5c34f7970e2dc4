//! Delivery counters for observability
//!
//! Sink write failures are swallowed on every public call path by design;
//! these counters are the side channel that makes the losses visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what happened to records after acceptance.
///
/// # Example
///
/// ```
/// use linelog::Metrics;
///
/// let metrics = Metrics::new();
/// metrics.record_enqueued();
/// metrics.record_written();
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.dropped(), 0);
/// ```
#[derive(Debug)]
pub struct Metrics {
    /// Records accepted into the delivery queue
    enqueued: AtomicU64,
    /// Records the worker handed to the sink without error
    written: AtomicU64,
    /// Records discarded: enqueue after flush, or lost to a write error
    dropped: AtomicU64,
    /// Sink write failures (buffered and terminal paths)
    write_errors: AtomicU64,
    /// Panic/fatal records written on the synchronous path
    terminal_writes: AtomicU64,
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            written: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            terminal_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn terminal_writes(&self) -> u64 {
        self.terminal_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_terminal_write(&self) -> u64 {
        self.terminal_writes.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Metrics {
    /// Snapshot of the current counter values.
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued()),
            written: AtomicU64::new(self.written()),
            dropped: AtomicU64::new(self.dropped()),
            write_errors: AtomicU64::new(self.write_errors()),
            terminal_writes: AtomicU64::new(self.terminal_writes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = Metrics::new();
        assert_eq!(metrics.enqueued(), 0);
        assert_eq!(metrics.written(), 0);
        assert_eq!(metrics.dropped(), 0);
        assert_eq!(metrics.write_errors(), 0);
        assert_eq!(metrics.terminal_writes(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = Metrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        assert_eq!(metrics.dropped(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let metrics = Metrics::new();
        metrics.record_written();
        let snapshot = metrics.clone();
        metrics.record_written();
        assert_eq!(metrics.written(), 2);
        assert_eq!(snapshot.written(), 1);
    }
}
