//! Benchmark harness for cyclebench.
//!
//! Times an imperative and a declarative [`Strategy`](cyclebench_core::Strategy)
//! against each other for every [`Operation`](cyclebench_core::Operation),
//! across a [`SizeSweep`], and hands one [`ResultSeries`] per operation to a
//! [`Renderer`].
//!
//! # Overview
//!
//! - [`TimingDriver`] runs each strategy a fixed number of times per size and
//!   reduces the two batch times to a signed delta
//! - [`Harness`] walks the sweep in order, one method per operation
//! - [`Renderer`] receives each series as soon as it is measured and writes
//!   artifacts on [`finalize`](Renderer::finalize)
//!
//! # Example
//!
//! ```
//! use cyclebench_harness::{CsvExporter, Harness, SizeSweep};
//!
//! let sweep = SizeSweep::new(vec![10, 20, 30]).unwrap();
//! let harness = Harness::new(sweep.clone()).with_repetitions(2);
//!
//! let mut csv = CsvExporter::new(sweep);
//! harness.run(&mut csv).unwrap();
//!
//! let table = csv.to_csv();
//! assert!(table.starts_with("size,build_mapping,filter_mapping"));
//! assert_eq!(table.lines().count(), 4);
//! ```

mod driver;
mod error;
mod harness;
mod render;
mod series;
mod sweep;

pub use driver::{TimingDriver, TimingSample};
pub use error::BenchError;
pub use harness::Harness;
pub use render::{
    renderer_for, CompositeRenderer, CsvExporter, JsonExporter, MarkdownReport, Renderer,
    SvgChart,
};
pub use series::ResultSeries;
pub use sweep::SizeSweep;
