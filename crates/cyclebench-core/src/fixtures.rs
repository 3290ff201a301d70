//! Filter-operation inputs.
//!
//! Each filter operation is timed against a container built once per size.
//! The shapes match the blog post: every element of `0..n` is present, so
//! half of the input survives the odd filter.

use std::collections::{HashMap, HashSet};

/// `{i: "value=i"}` for `i` in `0..n`.
///
/// ```
/// let data = cyclebench_core::fixtures::mapping_input(3);
/// assert_eq!(data.len(), 3);
/// assert_eq!(data[&2], "value=2");
/// ```
pub fn mapping_input(n: usize) -> HashMap<usize, String> {
    (0..n).map(|i| (i, format!("value={i}"))).collect()
}

/// `[0, 1, ..., n-1]`.
pub fn sequence_input(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `{0, 1, ..., n-1}`.
pub fn set_input(n: usize) -> HashSet<usize> {
    (0..n).collect()
}
