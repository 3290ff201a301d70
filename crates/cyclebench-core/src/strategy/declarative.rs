//! Iterator-chain strategy.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::Strategy;
use crate::parity::{Parity, Tag};

/// Builds every container as a single iterator chain ending in `collect()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Declarative;

impl Strategy for Declarative {
    fn name(&self) -> &'static str {
        "declarative"
    }

    fn build_mapping(&self, n: usize) -> HashMap<usize, Tag> {
        (0..n).map(|i| (i, Tag::of(&i))).collect()
    }

    fn filter_mapping<K, V>(&self, data: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Parity + Eq + Hash + Clone,
        V: Clone,
    {
        data.iter()
            .filter(|(key, _)| key.is_odd())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn build_sequence(&self, n: usize) -> Vec<usize> {
        (0..n).map(|i| i * 2).collect()
    }

    fn filter_sequence<T>(&self, data: &[T]) -> Vec<T>
    where
        T: Parity + Clone,
    {
        data.iter().filter(|item| item.is_odd()).cloned().collect()
    }

    fn build_set(&self, n: usize) -> HashSet<usize> {
        (0..n).filter(|i| i.is_odd()).collect()
    }

    fn filter_set<T>(&self, data: &HashSet<T>) -> HashSet<T>
    where
        T: Parity + Eq + Hash + Clone,
    {
        data.iter().filter(|item| item.is_odd()).cloned().collect()
    }
}
