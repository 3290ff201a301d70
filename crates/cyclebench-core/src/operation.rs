//! The fixed set of benchmarked operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six build/filter transformations under benchmark.
///
/// # Example
///
/// ```
/// use cyclebench_core::Operation;
///
/// assert_eq!(Operation::ALL.len(), 6);
/// assert_eq!(Operation::ALL[0], Operation::BuildMapping);
/// assert_eq!(Operation::FilterSequence.label(), "vec filter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    BuildMapping,
    FilterMapping,
    BuildSequence,
    FilterSequence,
    BuildSet,
    FilterSet,
}

impl Operation {
    /// All operations in run order.
    pub const ALL: [Operation; 6] = [
        Operation::BuildMapping,
        Operation::FilterMapping,
        Operation::BuildSequence,
        Operation::FilterSequence,
        Operation::BuildSet,
        Operation::FilterSet,
    ];

    /// Legend label used on charts.
    pub fn label(self) -> &'static str {
        match self {
            Operation::BuildMapping => "new map",
            Operation::FilterMapping => "map filter",
            Operation::BuildSequence => "new vec",
            Operation::FilterSequence => "vec filter",
            Operation::BuildSet => "new set",
            Operation::FilterSet => "set filter",
        }
    }

    /// Stable identifier used as a column or field name in exports.
    pub fn id(self) -> &'static str {
        match self {
            Operation::BuildMapping => "build_mapping",
            Operation::FilterMapping => "filter_mapping",
            Operation::BuildSequence => "build_sequence",
            Operation::FilterSequence => "filter_sequence",
            Operation::BuildSet => "build_set",
            Operation::FilterSet => "filter_set",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_order_pairs_build_with_filter() {
        let labels: Vec<&str> = Operation::ALL.iter().map(|op| op.label()).collect();
        assert_eq!(
            labels,
            vec!["new map", "map filter", "new vec", "vec filter", "new set", "set filter"]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Operation::ALL.iter().map(|op| op.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Operation::ALL.len());
    }
}
