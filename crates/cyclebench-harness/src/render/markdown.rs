//! Markdown report generation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cyclebench_config::OutputFormat;

use super::{write_artifact, Plotted, Renderer};
use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

/// Markdown report generator.
///
/// Generates a human-readable report with one summary row per series and a
/// per-size table of deltas in microseconds.
///
/// # Example
///
/// ```
/// use cyclebench_core::Operation;
/// use cyclebench_harness::{MarkdownReport, Renderer, ResultSeries, SizeSweep};
///
/// let mut report = MarkdownReport::new(SizeSweep::new(vec![100]).unwrap());
/// report
///     .plot(ResultSeries::from_deltas(Operation::FilterMapping, vec![0.000_25]), "map filter")
///     .unwrap();
///
/// let md = report.to_markdown();
/// assert!(md.contains("## Summary"));
/// assert!(md.contains("| map filter | 250.00 | 250.00 | 250.00 | declarative |"));
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownReport {
    title: String,
    plotted: Plotted,
}

impl MarkdownReport {
    /// Creates an empty report over `sweep`.
    pub fn new(sweep: SizeSweep) -> Self {
        Self {
            title: "Imperative vs declarative collection building".to_string(),
            plotted: Plotted::new(sweep),
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Generates the report.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        // Title
        let _ = writeln!(output, "# Benchmark: {}", self.title);
        let _ = writeln!(output);

        // Metadata
        let sweep = &self.plotted.sweep;
        let _ = writeln!(output, "- **Sizes**: {}", sweep.len());
        let _ = writeln!(output, "- **Range**: {} to {}", sweep.min(), sweep.max());
        let _ = writeln!(output, "- **Delta**: imperative minus declarative, in µs");
        let _ = writeln!(output);

        // Summary
        let _ = writeln!(output, "## Summary");
        let _ = writeln!(output);

        if self.plotted.lines.is_empty() {
            let _ = writeln!(output, "*No series plotted.*");
            return output;
        }

        let _ = writeln!(output, "| Series | Mean Δ (µs) | Min Δ (µs) | Max Δ (µs) | Faster on average |");
        let _ = writeln!(output, "|--------|-------------|------------|------------|-------------------|");
        for (label, series) in &self.plotted.lines {
            let mean = series.mean().unwrap_or(0.0);
            let _ = writeln!(
                output,
                "| {} | {:.2} | {:.2} | {:.2} | {} |",
                label,
                micros(mean),
                micros(series.min().unwrap_or(0.0)),
                micros(series.max().unwrap_or(0.0)),
                faster(mean),
            );
        }
        let _ = writeln!(output);

        // Detailed results
        let _ = writeln!(output, "## Deltas by Size");
        let _ = writeln!(output);

        let _ = write!(output, "| Size |");
        for (label, _) in &self.plotted.lines {
            let _ = write!(output, " {label} |");
        }
        let _ = writeln!(output);
        let _ = write!(output, "|------|");
        for (label, _) in &self.plotted.lines {
            let _ = write!(output, "{}|", "-".repeat(label.chars().count() + 2));
        }
        let _ = writeln!(output);

        for (row, size) in sweep.iter().enumerate() {
            let _ = write!(output, "| {size} |");
            for (_, series) in &self.plotted.lines {
                let _ = write!(output, " {:.2} |", micros(series.deltas()[row]));
            }
            let _ = writeln!(output);
        }

        output
    }
}

impl Renderer for MarkdownReport {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        self.plotted.push(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        Ok(vec![write_artifact(destination, OutputFormat::Markdown, &self.to_markdown())?])
    }
}

fn micros(seconds: f64) -> f64 {
    seconds * 1_000_000.0
}

fn faster(mean_delta: f64) -> &'static str {
    if mean_delta > 0.0 {
        "declarative"
    } else if mean_delta < 0.0 {
        "imperative"
    } else {
        "tie"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclebench_core::Operation;

    #[test]
    fn test_empty_report() {
        let report = MarkdownReport::new(SizeSweep::new(vec![1, 2]).unwrap());
        let md = report.to_markdown();
        assert!(md.contains("# Benchmark: Imperative vs declarative collection building"));
        assert!(md.contains("*No series plotted.*"));
        assert!(!md.contains("## Deltas by Size"));
    }

    #[test]
    fn test_per_size_table() {
        let mut report =
            MarkdownReport::new(SizeSweep::new(vec![10, 20]).unwrap()).with_title("fast");
        report
            .plot(
                ResultSeries::from_deltas(Operation::BuildSet, vec![-0.000_001, -0.000_003]),
                "new set",
            )
            .unwrap();

        let md = report.to_markdown();
        assert!(md.contains("# Benchmark: fast"));
        assert!(md.contains("| new set | -2.00 | -3.00 | -1.00 | imperative |"));
        assert!(md.contains("| Size | new set |"));
        assert!(md.contains("| 10 | -1.00 |"));
        assert!(md.contains("| 20 | -3.00 |"));
    }

    #[test]
    fn test_faster_side() {
        assert_eq!(faster(1.0), "declarative");
        assert_eq!(faster(-1.0), "imperative");
        assert_eq!(faster(0.0), "tie");
    }
}
