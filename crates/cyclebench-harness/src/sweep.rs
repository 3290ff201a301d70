//! Input sizes defining the x-axis.

use serde::Serialize;

use cyclebench_config::ProfileConfig;

use crate::error::BenchError;

/// Ordered, non-empty list of positive input sizes.
///
/// The order is kept exactly as given; it is the x-axis of every series
/// measured over this sweep.
///
/// # Example
///
/// ```
/// use cyclebench_harness::SizeSweep;
///
/// let sweep = SizeSweep::linear(3, 10_000).unwrap();
/// assert_eq!(sweep.as_slice(), &[10_000, 20_000, 30_000]);
///
/// assert!(SizeSweep::new(vec![]).is_err());
/// assert!(SizeSweep::new(vec![5, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeSweep {
    sizes: Vec<usize>,
}

impl SizeSweep {
    /// Creates a sweep from caller-supplied sizes.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidSweep`] for an empty list or a zero size.
    pub fn new(sizes: Vec<usize>) -> Result<Self, BenchError> {
        if sizes.is_empty() {
            return Err(BenchError::InvalidSweep("sweep has no sizes".into()));
        }
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(BenchError::InvalidSweep(format!(
                "size at position {index} is zero"
            )));
        }
        Ok(Self { sizes })
    }

    /// Creates `[step, 2*step, ..., count*step]`.
    pub fn linear(count: usize, step: usize) -> Result<Self, BenchError> {
        let sizes = (1..=count)
            .map(|i| {
                i.checked_mul(step).ok_or_else(|| {
                    BenchError::InvalidSweep(format!("{count} x {step} overflows usize"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sizes)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied()
    }

    /// Number of sizes; every series over this sweep has this many points.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false for a constructed sweep.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Smallest size in the sweep.
    pub fn min(&self) -> usize {
        self.sizes.iter().copied().min().unwrap_or_default()
    }

    /// Largest size in the sweep.
    pub fn max(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or_default()
    }
}

impl TryFrom<&ProfileConfig> for SizeSweep {
    type Error = BenchError;

    fn try_from(profile: &ProfileConfig) -> Result<Self, Self::Error> {
        Self::linear(profile.count, profile.step)
    }
}
