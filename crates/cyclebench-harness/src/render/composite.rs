//! Fan-out to several renderers.

use std::path::{Path, PathBuf};

use cyclebench_config::OutputFormat;

use super::{renderer_for, Renderer};
use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

/// Forwards every series to each child renderer.
///
/// On [`finalize`](Renderer::finalize) every child receives the same stem
/// and appends its own extension, so one stem yields `stem.svg`, `stem.csv`
/// and so on.
///
/// # Example
///
/// ```
/// use cyclebench_config::OutputFormat;
/// use cyclebench_harness::{CompositeRenderer, SizeSweep};
///
/// let sweep = SizeSweep::new(vec![1, 2]).unwrap();
/// let composite = CompositeRenderer::for_formats(&[OutputFormat::Svg, OutputFormat::Csv], &sweep);
/// assert_eq!(composite.len(), 2);
/// ```
#[derive(Default)]
pub struct CompositeRenderer {
    children: Vec<Box<dyn Renderer>>,
}

impl CompositeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one child per format, in order.
    pub fn for_formats(formats: &[OutputFormat], sweep: &SizeSweep) -> Self {
        Self {
            children: formats
                .iter()
                .map(|&format| renderer_for(format, sweep))
                .collect(),
        }
    }

    /// Adds a child renderer.
    pub fn with(mut self, renderer: impl Renderer + 'static) -> Self {
        self.children.push(Box::new(renderer));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Renderer for CompositeRenderer {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        let Some((last, rest)) = self.children.split_last_mut() else {
            return Ok(());
        };
        for child in rest {
            child.plot(series.clone(), label)?;
        }
        last.plot(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        let mut written = Vec::new();
        for child in &mut self.children {
            written.extend(child.finalize(destination)?);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclebench_core::Operation;

    use crate::render::{CsvExporter, MarkdownReport};

    #[test]
    fn test_every_child_gets_every_series() {
        let dir = tempfile::tempdir().unwrap();
        let sweep = SizeSweep::new(vec![4, 8]).unwrap();
        let mut composite = CompositeRenderer::new()
            .with(CsvExporter::new(sweep.clone()))
            .with(MarkdownReport::new(sweep));

        composite
            .plot(ResultSeries::from_deltas(Operation::BuildMapping, vec![0.1, 0.2]), "new map")
            .unwrap();
        composite
            .plot(ResultSeries::from_deltas(Operation::BuildSet, vec![0.3, 0.4]), "new set")
            .unwrap();

        let written = composite.finalize(&dir.path().join("result")).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("result.csv"), dir.path().join("result.md")]
        );

        let csv = std::fs::read_to_string(&written[0]).unwrap();
        assert!(csv.starts_with("size,build_mapping,build_set\n"));
        let md = std::fs::read_to_string(&written[1]).unwrap();
        assert!(md.contains("| new map |"));
        assert!(md.contains("| new set |"));
    }

    #[test]
    fn test_dotted_stems_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let sweep = SizeSweep::new(vec![10, 20]).unwrap();

        let mut written = Vec::new();
        for stem in ["comprehension_vs_cycle_v1.2", "comprehension_vs_cycle_v1.3"] {
            let mut composite =
                CompositeRenderer::for_formats(&[OutputFormat::Svg, OutputFormat::Csv], &sweep);
            composite
                .plot(ResultSeries::from_deltas(Operation::BuildSet, vec![0.1, 0.2]), "new set")
                .unwrap();
            written.extend(composite.finalize(&dir.path().join(stem)).unwrap());
        }

        assert_eq!(
            written,
            vec![
                dir.path().join("comprehension_vs_cycle_v1.2.svg"),
                dir.path().join("comprehension_vs_cycle_v1.2.csv"),
                dir.path().join("comprehension_vs_cycle_v1.3.svg"),
                dir.path().join("comprehension_vs_cycle_v1.3.csv"),
            ]
        );
        assert!(written.iter().all(|path| path.is_file()));
    }

    #[test]
    fn test_child_error_propagates() {
        let sweep = SizeSweep::new(vec![1, 2, 3]).unwrap();
        let mut composite = CompositeRenderer::for_formats(&[OutputFormat::Json], &sweep);
        let err = composite
            .plot(ResultSeries::from_deltas(Operation::FilterSet, vec![1.0]), "set filter")
            .unwrap_err();
        assert!(matches!(err, BenchError::SeriesLength { expected: 3, actual: 1, .. }));
    }

    #[test]
    fn test_empty_composite_is_noop() {
        let mut composite = CompositeRenderer::new();
        assert!(composite.is_empty());
        composite
            .plot(ResultSeries::new(Operation::BuildSequence), "new vec")
            .unwrap();
        assert!(composite.finalize(Path::new("unused")).unwrap().is_empty());
    }
}
