//! Explicit-loop strategy.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::Strategy;
use crate::parity::{Parity, Tag};

/// Builds every container with a `for` loop, starting from an empty
/// container and inserting one element at a time.
///
/// No capacity hints are given; the container grows as the loop runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Imperative;

impl Strategy for Imperative {
    fn name(&self) -> &'static str {
        "imperative"
    }

    fn build_mapping(&self, n: usize) -> HashMap<usize, Tag> {
        let mut result = HashMap::new();
        for i in 0..n {
            if i % 2 != 0 {
                result.insert(i, Tag::Odd);
            } else {
                result.insert(i, Tag::Even);
            }
        }
        result
    }

    fn filter_mapping<K, V>(&self, data: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Parity + Eq + Hash + Clone,
        V: Clone,
    {
        let mut result = HashMap::new();
        for (key, value) in data {
            if key.is_odd() {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }

    fn build_sequence(&self, n: usize) -> Vec<usize> {
        let mut result = Vec::new();
        for i in 0..n {
            result.push(i * 2);
        }
        result
    }

    fn filter_sequence<T>(&self, data: &[T]) -> Vec<T>
    where
        T: Parity + Clone,
    {
        let mut result = Vec::new();
        for item in data {
            if item.is_odd() {
                result.push(item.clone());
            }
        }
        result
    }

    fn build_set(&self, n: usize) -> HashSet<usize> {
        let mut result = HashSet::new();
        for i in 0..n {
            if i % 2 != 0 {
                result.insert(i);
            }
        }
        result
    }

    fn filter_set<T>(&self, data: &HashSet<T>) -> HashSet<T>
    where
        T: Parity + Eq + Hash + Clone,
    {
        let mut result = HashSet::new();
        for item in data {
            if item.is_odd() {
                result.insert(item.clone());
            }
        }
        result
    }
}
