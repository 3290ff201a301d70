//! Strategy trait and its two implementations.
//!
//! A strategy implements all six operations. Build operations take a size,
//! filter operations borrow a prebuilt container. Filters never get mutable
//! access, so one strategy cannot disturb the input the other one is timed on.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::parity::{Parity, Tag};

mod declarative;
mod imperative;


pub use declarative::Declarative;
pub use imperative::Imperative;

/// One way of building and filtering containers.
///
/// Implementations are stateless: calling an operation twice with the same
/// input must produce equal output.
///
/// Methods are generic rather than object-safe; the harness keeps both
/// strategies as type parameters.
pub trait Strategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Builds `{0: even, 1: odd, ..., n-1: _}`.
    fn build_mapping(&self, n: usize) -> HashMap<usize, Tag>;

    /// Keeps the entries of `data` whose key is odd.
    fn filter_mapping<K, V>(&self, data: &HashMap<K, V>) -> HashMap<K, V>
    where
        K: Parity + Eq + Hash + Clone,
        V: Clone;

    /// Builds `[0, 2, 4, ..., 2(n-1)]`.
    fn build_sequence(&self, n: usize) -> Vec<usize>;

    /// Keeps the odd elements of `data`, preserving order.
    fn filter_sequence<T>(&self, data: &[T]) -> Vec<T>
    where
        T: Parity + Clone;

    /// Builds the set of odd integers in `[0, n)`.
    fn build_set(&self, n: usize) -> HashSet<usize>;

    /// Keeps the odd elements of `data`.
    fn filter_set<T>(&self, data: &HashSet<T>) -> HashSet<T>
    where
        T: Parity + Eq + Hash + Clone;
}
