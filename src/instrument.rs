//! Pixel-access and comparison counters.
//!
//! A `Counters` value is threaded by reference through every counted
//! operation. It is diagnostic only: no result depends on it. The counters are
//! relaxed atomics so one instance can be shared by the parallel filter, and
//! totals stay identical to a sequential run.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Instrumentation state owned by the caller.
#[derive(Debug, Default)]
pub struct Counters {
    pixel_accesses: AtomicU64,
    comparisons: AtomicU64,
}

impl Counters {
    /// Creates a counter set with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of single-pixel reads and writes performed through
    /// [`PixelAccessor`](crate::PixelAccessor).
    pub fn pixel_accesses(&self) -> u64 {
        self.pixel_accesses.load(Ordering::Relaxed)
    }

    /// Number of pixel equality tests plus anchors tried by subimage search.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Captures both counts at once.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            pixel_accesses: self.pixel_accesses(),
            comparisons: self.comparisons(),
        }
    }

    /// Resets both counts to zero.
    pub fn reset(&self) {
        self.pixel_accesses.store(0, Ordering::Relaxed);
        self.comparisons.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_pixel_accesses(&self, n: u64) {
        self.pixel_accesses.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_comparisons(&self, n: u64) {
        self.comparisons.fetch_add(n, Ordering::Relaxed);
    }
}

/// Point-in-time copy of a [`Counters`] value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Pixel reads and writes.
    pub pixel_accesses: u64,
    /// Pixel comparisons and anchors tried.
    pub comparisons: u64,
}

impl CounterSnapshot {
    /// Returns the counts accumulated since `earlier`.
    pub fn since(&self, earlier: CounterSnapshot) -> CounterSnapshot {
        CounterSnapshot {
            pixel_accesses: self.pixel_accesses.saturating_sub(earlier.pixel_accesses),
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
        }
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixmem={} comparisons={}",
            self.pixel_accesses, self.comparisons
        )
    }
}
