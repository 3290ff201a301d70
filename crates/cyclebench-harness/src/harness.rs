//! Sweep orchestrator.

use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use cyclebench_core::fixtures::{mapping_input, sequence_input, set_input};
use cyclebench_core::{Declarative, Imperative, Operation, Strategy};

use crate::driver::{TimingDriver, TimingSample};
use crate::error::BenchError;
use crate::render::Renderer;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

/// Times two strategies against each other over a size sweep.
///
/// Both strategies are type parameters, so every timed call is statically
/// dispatched. The harness keeps no state between runs; each measurement
/// method returns a fresh [`ResultSeries`].
///
/// # Type Parameters
///
/// * `I` - The imperative strategy (timed first at each size)
/// * `D` - The declarative strategy
pub struct Harness<I = Imperative, D = Declarative>
where
    I: Strategy,
    D: Strategy,
{
    sweep: SizeSweep,
    driver: TimingDriver,
    imperative: I,
    declarative: D,
}

impl Harness<Imperative, Declarative> {
    /// Creates a harness comparing [`Imperative`] with [`Declarative`]
    /// using the default repetition count.
    pub fn new(sweep: SizeSweep) -> Self {
        Self::with_strategies(sweep, Imperative, Declarative)
    }
}

impl<I, D> Harness<I, D>
where
    I: Strategy,
    D: Strategy,
{
    /// Creates a harness for arbitrary strategies.
    pub fn with_strategies(sweep: SizeSweep, imperative: I, declarative: D) -> Self {
        Self {
            sweep,
            driver: TimingDriver::default(),
            imperative,
            declarative,
        }
    }

    /// Sets the number of timed calls per strategy per size.
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.driver = TimingDriver::new(repetitions);
        self
    }

    pub fn sweep(&self) -> &SizeSweep {
        &self.sweep
    }

    pub fn repetitions(&self) -> u32 {
        self.driver.repetitions()
    }

    /// Measures one operation over the whole sweep.
    pub fn measure(&self, operation: Operation) -> ResultSeries {
        match operation {
            Operation::BuildMapping => self.build_mapping(),
            Operation::FilterMapping => self.filter_mapping(),
            Operation::BuildSequence => self.build_sequence(),
            Operation::FilterSequence => self.filter_sequence(),
            Operation::BuildSet => self.build_set(),
            Operation::FilterSet => self.filter_set(),
        }
    }

    pub fn build_mapping(&self) -> ResultSeries {
        self.sweep_build(
            Operation::BuildMapping,
            |s, n| s.build_mapping(n),
            |s, n| s.build_mapping(n),
        )
    }

    pub fn filter_mapping(&self) -> ResultSeries {
        self.sweep_filter(
            Operation::FilterMapping,
            mapping_input,
            |s, data| s.filter_mapping(data),
            |s, data| s.filter_mapping(data),
        )
    }

    pub fn build_sequence(&self) -> ResultSeries {
        self.sweep_build(
            Operation::BuildSequence,
            |s, n| s.build_sequence(n),
            |s, n| s.build_sequence(n),
        )
    }

    pub fn filter_sequence(&self) -> ResultSeries {
        self.sweep_filter(
            Operation::FilterSequence,
            sequence_input,
            |s, data| s.filter_sequence(data.as_slice()),
            |s, data| s.filter_sequence(data.as_slice()),
        )
    }

    pub fn build_set(&self) -> ResultSeries {
        self.sweep_build(
            Operation::BuildSet,
            |s, n| s.build_set(n),
            |s, n| s.build_set(n),
        )
    }

    pub fn filter_set(&self) -> ResultSeries {
        self.sweep_filter(
            Operation::FilterSet,
            set_input,
            |s, data| s.filter_set(data),
            |s, data| s.filter_set(data),
        )
    }

    /// Measures all six operations in run order, handing each series to
    /// `renderer` as soon as it is complete.
    ///
    /// # Errors
    ///
    /// Stops at the first renderer error.
    pub fn run<R>(&self, renderer: &mut R) -> Result<(), BenchError>
    where
        R: Renderer + ?Sized,
    {
        let start = Instant::now();

        for operation in Operation::ALL {
            let series = self.measure(operation);
            renderer.plot(series, operation.label())?;
            info!(event = "series_plotted", operation = operation.label());
        }

        info!(
            event = "run_end",
            operations = Operation::ALL.len() as u64,
            sizes = self.sweep.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(())
    }

    /// Runs every operation, then finalizes `renderer` to `destination`.
    ///
    /// Returns the paths of the written artifacts.
    pub fn process<R>(
        &self,
        renderer: &mut R,
        destination: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, BenchError>
    where
        R: Renderer + ?Sized,
    {
        self.run(renderer)?;
        let written = renderer.finalize(destination.as_ref())?;
        for path in &written {
            info!(event = "artifact_written", path = %path.display());
        }
        Ok(written)
    }

    fn sweep_build<TI, TD>(
        &self,
        operation: Operation,
        imperative: impl Fn(&I, usize) -> TI,
        declarative: impl Fn(&D, usize) -> TD,
    ) -> ResultSeries {
        self.log_start(operation);
        let start = Instant::now();
        let mut series = ResultSeries::with_capacity(operation, self.sweep.len());

        for size in self.sweep.iter() {
            let sample = self.driver.sample(
                size,
                || imperative(&self.imperative, black_box(size)),
                || declarative(&self.declarative, black_box(size)),
            );
            record(&mut series, &sample);
        }

        log_end(&series, start);
        series
    }

    fn sweep_filter<C, TI, TD>(
        &self,
        operation: Operation,
        input: impl Fn(usize) -> C,
        imperative: impl Fn(&I, &C) -> TI,
        declarative: impl Fn(&D, &C) -> TD,
    ) -> ResultSeries {
        self.log_start(operation);
        let start = Instant::now();
        let mut series = ResultSeries::with_capacity(operation, self.sweep.len());

        for size in self.sweep.iter() {
            // Built once per size, shared by both batches, dropped before the next size.
            let data = input(size);
            let sample = self.driver.sample(
                size,
                || imperative(&self.imperative, black_box(&data)),
                || declarative(&self.declarative, black_box(&data)),
            );
            record(&mut series, &sample);
        }

        log_end(&series, start);
        series
    }

    fn log_start(&self, operation: Operation) {
        info!(
            event = "operation_start",
            operation = operation.label(),
            imperative = self.imperative.name(),
            declarative = self.declarative.name(),
            sizes = self.sweep.len() as u64,
            repetitions = self.driver.repetitions() as u64,
        );
    }
}

fn record(series: &mut ResultSeries, sample: &TimingSample) {
    debug!(
        event = "size_measured",
        operation = series.operation().label(),
        size = sample.size as u64,
        imperative_ns = sample.imperative.as_nanos() as u64,
        declarative_ns = sample.declarative.as_nanos() as u64,
    );
    series.push(sample.delta());
}

fn log_end(series: &ResultSeries, start: Instant) {
    info!(
        event = "operation_end",
        operation = series.operation().label(),
        duration_ms = start.elapsed().as_millis() as u64,
        mean_delta_ns = (series.mean().unwrap_or(0.0) * 1e9) as i64,
    );
}

#[cfg(test)]
mod tests;
