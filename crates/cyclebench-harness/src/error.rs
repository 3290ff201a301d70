//! Harness error type.

use thiserror::Error;

/// Errors raised while preparing a sweep or writing artifacts.
///
/// Strategy calls themselves are infallible; a panic inside one aborts
/// the whole sweep.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid size sweep: {0}")]
    InvalidSweep(String),

    #[error("Series '{label}' has {actual} points, expected {expected}")]
    SeriesLength {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("Nothing to render: no series were plotted")]
    EmptyChart,
}
