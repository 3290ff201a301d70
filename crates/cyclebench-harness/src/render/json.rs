//! JSON export of a whole sweep.

use std::path::{Path, PathBuf};

use serde::Serialize;

use cyclebench_config::OutputFormat;
use cyclebench_core::Operation;

use super::{write_artifact, Plotted, Renderer};
use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

/// Writes the sweep and every plotted series as one JSON document.
///
/// ```json
/// {
///   "sizes": [10, 20],
///   "series": [
///     { "operation": "build_mapping", "label": "new map", "deltas": [0.1, 0.2] }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonExporter {
    plotted: Plotted,
}

#[derive(Serialize)]
struct Document<'a> {
    sizes: &'a SizeSweep,
    series: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    operation: Operation,
    label: &'a str,
    deltas: &'a [f64],
}

impl JsonExporter {
    /// Creates an empty document over `sweep`.
    pub fn new(sweep: SizeSweep) -> Self {
        Self {
            plotted: Plotted::new(sweep),
        }
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BenchError> {
        let document = Document {
            sizes: &self.plotted.sweep,
            series: self
                .plotted
                .lines
                .iter()
                .map(|(label, series)| Entry {
                    operation: series.operation(),
                    label,
                    deltas: series.deltas(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl Renderer for JsonExporter {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        self.plotted.push(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        let json = self.to_json()?;
        Ok(vec![write_artifact(destination, OutputFormat::Json, &json)?])
    }
}
