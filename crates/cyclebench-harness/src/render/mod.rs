//! Rendering collaborators receiving measured series.
//!
//! A renderer is built for one [`SizeSweep`]; every series it receives shares
//! that sweep as its x-axis. Series are plotted one at a time as the harness
//! produces them, and artifacts are only written on
//! [`finalize`](Renderer::finalize).

use std::path::{Path, PathBuf};

use cyclebench_config::OutputFormat;

use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

mod composite;
mod csv;
mod json;
mod markdown;
mod svg;

pub use composite::CompositeRenderer;
pub use csv::CsvExporter;
pub use json::JsonExporter;
pub use markdown::MarkdownReport;
pub use svg::SvgChart;

/// Receives labeled series and writes them out.
pub trait Renderer {
    /// Appends a labeled series.
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError>;

    /// Writes everything plotted so far and returns the written paths.
    ///
    /// `destination` is a file stem; each renderer appends its own
    /// extension to the full file name.
    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        (**self).plot(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        (**self).finalize(destination)
    }
}

/// Creates the renderer for an output format.
pub fn renderer_for(format: OutputFormat, sweep: &SizeSweep) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Svg => Box::new(SvgChart::new(sweep.clone())),
        OutputFormat::Csv => Box::new(CsvExporter::new(sweep.clone())),
        OutputFormat::Markdown => Box::new(MarkdownReport::new(sweep.clone())),
        OutputFormat::Json => Box::new(JsonExporter::new(sweep.clone())),
    }
}

/// Labeled series sharing one sweep.
#[derive(Debug, Clone)]
struct Plotted {
    sweep: SizeSweep,
    lines: Vec<(String, ResultSeries)>,
}

impl Plotted {
    fn new(sweep: SizeSweep) -> Self {
        Self {
            sweep,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        if series.len() != self.sweep.len() {
            return Err(BenchError::SeriesLength {
                label: label.to_string(),
                expected: self.sweep.len(),
                actual: series.len(),
            });
        }
        self.lines.push((label.to_string(), series));
        Ok(())
    }
}

/// Appends `.{extension}` to the file name unless it already ends with it.
///
/// Dots already in the stem are kept, so `run_1.5x` becomes `run_1.5x.svg`.
fn artifact_path(destination: &Path, extension: &str) -> PathBuf {
    if destination.extension().is_some_and(|ext| ext == extension) {
        return destination.to_path_buf();
    }
    let mut name = destination.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Writes `contents` to the artifact path, creating parent directories.
fn write_artifact(
    destination: &Path,
    format: OutputFormat,
    contents: &str,
) -> Result<PathBuf, BenchError> {
    let path = artifact_path(destination, format.extension());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclebench_core::Operation;

    #[test]
    fn test_artifact_path_appends_to_full_file_name() {
        assert_eq!(
            artifact_path(Path::new("out/chart"), "svg"),
            PathBuf::from("out/chart.svg")
        );
        assert_eq!(
            artifact_path(Path::new("out/chart.svg"), "svg"),
            PathBuf::from("out/chart.svg")
        );
        assert_eq!(
            artifact_path(Path::new("out/run_1.5x"), "csv"),
            PathBuf::from("out/run_1.5x.csv")
        );
    }

    #[test]
    fn test_mismatched_series_rejected() {
        let sweep = SizeSweep::new(vec![1, 2, 3]).unwrap();
        let mut plotted = Plotted::new(sweep);
        let err = plotted
            .push(ResultSeries::from_deltas(Operation::BuildSet, vec![0.1]), "new set")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Series 'new set' has 1 points, expected 3"
        );
    }

    #[test]
    fn test_renderer_for_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let sweep = SizeSweep::new(vec![1]).unwrap();
        let expected = [
            (OutputFormat::Svg, "chart.svg"),
            (OutputFormat::Csv, "chart.csv"),
            (OutputFormat::Markdown, "chart.md"),
            (OutputFormat::Json, "chart.json"),
        ];
        for (format, file) in expected {
            let mut renderer = renderer_for(format, &sweep);
            renderer
                .plot(ResultSeries::from_deltas(Operation::BuildSet, vec![0.5]), "new set")
                .unwrap();
            let written = renderer.finalize(&dir.path().join("chart")).unwrap();
            assert_eq!(written, vec![dir.path().join(file)]);
        }
    }
}
