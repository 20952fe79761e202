//! Arithmetic mean

use super::first_moment::FirstMoment;
use crate::traits::{Statistic, StatisticAccumulator};

/// Arithmetic mean of the values
///
/// The mean of no values is NaN. Any NaN input makes the mean NaN; infinities of one
/// sign give that infinity and infinities of both signs give NaN.
///
/// [`Mean::of`] uses the corrected two-pass algorithm and is in general more accurate
/// than accepting the same values one at a time, so the two may differ in the last
/// bits.
///
/// # Example
///
/// ```
/// use stablestats::descriptive::Mean;
/// use stablestats::traits::{Statistic, StatisticAccumulator};
///
/// let mut left = Mean::of(&[2.0, 4.0, 4.0, 4.0]);
/// let right = Mean::of(&[5.0, 5.0, 7.0, 9.0]);
/// left.combine(&right);
/// assert_eq!(left.value(), 5.0);
/// assert_eq!(left.count(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mean {
    m1: FirstMoment,
}

impl Mean {
    /// Create an empty mean
    pub const fn new() -> Self {
        Self {
            m1: FirstMoment::new(),
        }
    }

    /// Two-pass mean of `values`
    pub fn of(values: &[f64]) -> Self {
        Self {
            m1: FirstMoment::of(values),
        }
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m1.count()
    }
}

impl Statistic for Mean {
    fn value(&self) -> f64 {
        self.m1.first_moment()
    }
}

impl StatisticAccumulator for Mean {
    fn accept(&mut self, value: f64) {
        self.m1.accept(value);
    }

    fn combine(&mut self, other: &Self) -> &mut Self {
        self.m1.combine(&other.m1);
        self
    }
}

impl Extend<f64> for Mean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.m1.extend(iter);
    }
}
