//! Per-operation timing deltas.

use serde::Serialize;

use cyclebench_core::Operation;

/// Ordered timing deltas for one operation, one per swept size.
///
/// Each delta is `imperative - declarative` batch time in seconds, so a
/// positive value means the iterator chain was faster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSeries {
    operation: Operation,
    deltas: Vec<f64>,
}

impl ResultSeries {
    /// Creates an empty series.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            deltas: Vec::new(),
        }
    }

    /// Creates an empty series with room for `capacity` deltas.
    pub fn with_capacity(operation: Operation, capacity: usize) -> Self {
        Self {
            operation,
            deltas: Vec::with_capacity(capacity),
        }
    }

    /// Creates a series from precomputed deltas.
    ///
    /// ```
    /// use cyclebench_core::Operation;
    /// use cyclebench_harness::ResultSeries;
    ///
    /// let series = ResultSeries::from_deltas(Operation::BuildSet, vec![0.5, -0.25, 1.0]);
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series.min(), Some(-0.25));
    /// assert_eq!(series.max(), Some(1.0));
    /// assert!((series.mean().unwrap() - 0.416_666).abs() < 1e-5);
    /// ```
    pub fn from_deltas(operation: Operation, deltas: Vec<f64>) -> Self {
        Self { operation, deltas }
    }

    /// Appends the delta for the next size.
    pub fn push(&mut self, delta: f64) {
        self.deltas.push(delta);
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Returns the average delta.
    pub fn mean(&self) -> Option<f64> {
        if self.deltas.is_empty() {
            return None;
        }
        Some(self.deltas.iter().sum::<f64>() / self.deltas.len() as f64)
    }

    /// Returns the smallest delta.
    pub fn min(&self) -> Option<f64> {
        self.deltas.iter().copied().reduce(f64::min)
    }

    /// Returns the largest delta.
    pub fn max(&self) -> Option<f64> {
        self.deltas.iter().copied().reduce(f64::max)
    }
}
