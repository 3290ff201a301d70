//! CSV export of timing deltas.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cyclebench_config::OutputFormat;

use super::{write_artifact, Plotted, Renderer};
use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

/// CSV exporter for timing deltas.
///
/// One row per swept size, one column per plotted operation, deltas in
/// seconds.
///
/// # Example
///
/// ```
/// use cyclebench_core::Operation;
/// use cyclebench_harness::{CsvExporter, Renderer, ResultSeries, SizeSweep};
///
/// let mut csv = CsvExporter::new(SizeSweep::new(vec![10, 20]).unwrap());
/// csv.plot(ResultSeries::from_deltas(Operation::BuildSequence, vec![0.5, -0.25]), "new vec")
///     .unwrap();
///
/// assert_eq!(
///     csv.to_csv(),
///     "size,build_sequence\n10,0.500000000\n20,-0.250000000\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    plotted: Plotted,
}

impl CsvExporter {
    /// Creates an empty table over `sweep`.
    pub fn new(sweep: SizeSweep) -> Self {
        Self {
            plotted: Plotted::new(sweep),
        }
    }

    /// Renders the table.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        // Header
        let _ = write!(output, "size");
        for (_, series) in &self.plotted.lines {
            let _ = write!(output, ",{}", series.operation().id());
        }
        let _ = writeln!(output);

        // Data rows
        for (row, size) in self.plotted.sweep.iter().enumerate() {
            let _ = write!(output, "{size}");
            for (_, series) in &self.plotted.lines {
                let _ = write!(output, ",{:.9}", series.deltas()[row]);
            }
            let _ = writeln!(output);
        }

        output
    }
}

impl Renderer for CsvExporter {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        self.plotted.push(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        Ok(vec![write_artifact(destination, OutputFormat::Csv, &self.to_csv())?])
    }
}
