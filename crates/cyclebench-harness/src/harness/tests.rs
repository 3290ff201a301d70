//! Tests for the sweep orchestrator.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cyclebench_core::{Parity, Tag};

use super::*;

type CallLog = Rc<RefCell<Vec<(&'static str, &'static str, usize)>>>;

/// Delegates to `Imperative` and records every call.
struct Recording {
    name: &'static str,
    log: CallLog,
}

impl Recording {
    fn pair() -> (Self, Self, CallLog) {
        let log = CallLog::default();
        (
            Recording {
                name: "first",
                log: Rc::clone(&log),
            },
            Recording {
                name: "second",
                log: Rc::clone(&log),
            },
            log,
        )
    }

    fn note(&self, op: &'static str, size: usize) {
        self.log.borrow_mut().push((self.name, op, size));
    }
}

impl Strategy for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    fn build_mapping(&self, n: usize) -> HashMap<usize, Tag> {
        self.note("build_mapping", n);
        Imperative.build_mapping(n)
    }

    fn filter_mapping<K, V>(&self, data: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Parity + Eq + Hash + Clone,
        V: Clone,
    {
        self.note("filter_mapping", data.len());
        Imperative.filter_mapping(data)
    }

    fn build_sequence(&self, n: usize) -> Vec<usize> {
        self.note("build_sequence", n);
        Imperative.build_sequence(n)
    }

    fn filter_sequence<T>(&self, data: &[T]) -> Vec<T>
    where
        T: Parity + Clone,
    {
        self.note("filter_sequence", data.len());
        Imperative.filter_sequence(data)
    }

    fn build_set(&self, n: usize) -> HashSet<usize> {
        self.note("build_set", n);
        Imperative.build_set(n)
    }

    fn filter_set<T>(&self, data: &HashSet<T>) -> HashSet<T>
    where
        T: Parity + Eq + Hash + Clone,
    {
        self.note("filter_set", data.len());
        Imperative.filter_set(data)
    }
}

/// Panics on the size it is told to.
struct Exploding {
    at: usize,
}

impl Strategy for Exploding {
    fn name(&self) -> &'static str {
        "exploding"
    }

    fn build_mapping(&self, n: usize) -> HashMap<usize, Tag> {
        Imperative.build_mapping(n)
    }

    fn filter_mapping<K, V>(&self, data: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Parity + Eq + Hash + Clone,
        V: Clone,
    {
        Imperative.filter_mapping(data)
    }

    fn build_sequence(&self, n: usize) -> Vec<usize> {
        if n == self.at {
            panic!("strategy failed at size {n}");
        }
        Imperative.build_sequence(n)
    }

    fn filter_sequence<T>(&self, data: &[T]) -> Vec<T>
    where
        T: Parity + Clone,
    {
        Imperative.filter_sequence(data)
    }

    fn build_set(&self, n: usize) -> HashSet<usize> {
        Imperative.build_set(n)
    }

    fn filter_set<T>(&self, data: &HashSet<T>) -> HashSet<T>
    where
        T: Parity + Eq + Hash + Clone,
    {
        Imperative.filter_set(data)
    }
}

/// Keeps whatever it is handed.
#[derive(Default)]
struct Collector {
    plotted: Vec<(String, ResultSeries)>,
    finalized: Option<PathBuf>,
}

impl Renderer for Collector {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        self.plotted.push((label.to_string(), series));
        Ok(())
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        self.finalized = Some(destination.to_path_buf());
        Ok(vec![destination.to_path_buf()])
    }
}

fn sweep(sizes: &[usize]) -> SizeSweep {
    SizeSweep::new(sizes.to_vec()).unwrap()
}

#[test]
fn test_series_aligned_with_sweep() {
    let harness = Harness::new(sweep(&[5, 50, 500, 1])).with_repetitions(2);

    for operation in Operation::ALL {
        let series = harness.measure(operation);
        assert_eq!(series.operation(), operation);
        assert_eq!(series.len(), 4, "{operation}");
        assert!(series.deltas().iter().all(|d| d.is_finite()));
    }
}

#[test]
fn test_each_strategy_called_repetitions_times_per_size() {
    let (first, second, log) = Recording::pair();
    let harness =
        Harness::with_strategies(sweep(&[3, 7]), first, second).with_repetitions(4);

    harness.build_sequence();

    let calls = log.borrow();
    assert_eq!(calls.len(), 2 * 2 * 4);
    let first_calls = calls.iter().filter(|(who, _, _)| *who == "first").count();
    assert_eq!(first_calls, 8);
}

#[test]
fn test_imperative_measured_first_for_every_size_in_sweep_order() {
    let (first, second, log) = Recording::pair();
    let harness =
        Harness::with_strategies(sweep(&[9, 2, 6]), first, second).with_repetitions(1);

    harness.build_set();

    let calls: Vec<(&str, usize)> = log.borrow().iter().map(|(who, _, n)| (*who, *n)).collect();
    assert_eq!(
        calls,
        vec![
            ("first", 9),
            ("second", 9),
            ("first", 2),
            ("second", 2),
            ("first", 6),
            ("second", 6),
        ]
    );
}

#[test]
fn test_filter_input_built_per_size_and_shared() {
    let (first, second, log) = Recording::pair();
    let harness =
        Harness::with_strategies(sweep(&[10, 4]), first, second).with_repetitions(3);

    harness.filter_mapping();

    let calls = log.borrow();
    assert_eq!(calls.len(), 2 * 2 * 3);
    // Both strategies see the full, unmodified input at every repetition.
    assert!(calls[..6].iter().all(|(_, op, len)| *op == "filter_mapping" && *len == 10));
    assert!(calls[6..].iter().all(|(_, _, len)| *len == 4));
}

#[test]
fn test_run_forwards_all_operations_in_order() {
    let harness = Harness::new(sweep(&[8, 16])).with_repetitions(1);
    let mut collector = Collector::default();

    let written = harness.process(&mut collector, "chart").unwrap();

    let labels: Vec<&str> = collector.plotted.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(
        labels,
        vec!["new map", "map filter", "new vec", "vec filter", "new set", "set filter"]
    );
    let operations: Vec<Operation> = collector.plotted.iter().map(|(_, s)| s.operation()).collect();
    assert_eq!(operations, Operation::ALL.to_vec());
    assert!(collector.plotted.iter().all(|(_, s)| s.len() == 2));
    assert_eq!(written, vec![PathBuf::from("chart")]);
    assert_eq!(collector.finalized, Some(PathBuf::from("chart")));
}

#[test]
fn test_renderer_error_stops_run() {
    struct Refusing {
        calls: usize,
    }

    impl Renderer for Refusing {
        fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
            self.calls += 1;
            Err(BenchError::SeriesLength {
                label: label.to_string(),
                expected: 0,
                actual: series.len(),
            })
        }

        fn finalize(&mut self, _destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
            Ok(Vec::new())
        }
    }

    let harness = Harness::new(sweep(&[2])).with_repetitions(1);
    let mut refusing = Refusing { calls: 0 };

    assert!(harness.run(&mut refusing).is_err());
    assert_eq!(refusing.calls, 1);
}

#[test]
#[should_panic(expected = "strategy failed at size 20")]
fn test_strategy_panic_aborts_sweep() {
    let harness = Harness::with_strategies(sweep(&[10, 20, 30]), Exploding { at: 20 }, Declarative)
        .with_repetitions(1);
    harness.build_sequence();
}

#[test]
fn test_repetitions_default_and_override() {
    let harness = Harness::new(sweep(&[1]));
    assert_eq!(harness.repetitions(), 100);
    assert_eq!(harness.with_repetitions(5).repetitions(), 5);
}
