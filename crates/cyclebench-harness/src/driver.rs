//! Batch timing of two competing strategy calls.

use std::hint::black_box;
use std::time::{Duration, Instant};

use cyclebench_config::DEFAULT_REPETITIONS;

/// Batch times for one size.
///
/// Only [`delta`](Self::delta) is kept in a series; the raw batch times are
/// reported in debug logs and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Input size the batches ran at.
    pub size: usize,
    /// Total time of the imperative batch.
    pub imperative: Duration,
    /// Total time of the declarative batch.
    pub declarative: Duration,
}

impl TimingSample {
    /// Returns `imperative - declarative` in seconds.
    ///
    /// ```
    /// use cyclebench_harness::TimingSample;
    /// use std::time::Duration;
    ///
    /// let sample = TimingSample {
    ///     size: 10,
    ///     imperative: Duration::from_millis(30),
    ///     declarative: Duration::from_millis(50),
    /// };
    /// assert!((sample.delta() + 0.020).abs() < 1e-12);
    /// ```
    pub fn delta(&self) -> f64 {
        self.imperative.as_secs_f64() - self.declarative.as_secs_f64()
    }
}

/// Runs fixed-size batches of calls and times each batch as a whole.
///
/// Timing a batch rather than each call keeps timer resolution out of the
/// numbers. The imperative batch always runs first, immediately followed by
/// the declarative one; this ordering is a drift heuristic and may bias the
/// result slightly toward whichever side benefits from warm caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingDriver {
    repetitions: u32,
}

impl TimingDriver {
    /// Creates a driver running `repetitions` calls per batch.
    ///
    /// A repetition count of zero is raised to one.
    pub fn new(repetitions: u32) -> Self {
        Self {
            repetitions: repetitions.max(1),
        }
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Calls `f` `repetitions` times and returns the total elapsed time.
    pub fn time_batch<T, F>(&self, mut f: F) -> Duration
    where
        F: FnMut() -> T,
    {
        let start = Instant::now();
        for _ in 0..self.repetitions {
            black_box(f());
        }
        start.elapsed()
    }

    /// Times an imperative batch, then a declarative batch, at `size`.
    pub fn sample<A, B, TA, TB>(&self, size: usize, imperative: A, declarative: B) -> TimingSample
    where
        A: FnMut() -> TA,
        B: FnMut() -> TB,
    {
        let imperative = self.time_batch(imperative);
        let declarative = self.time_batch(declarative);
        TimingSample {
            size,
            imperative,
            declarative,
        }
    }
}

impl Default for TimingDriver {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}
