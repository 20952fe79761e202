//! Compensated sum statistic

use crate::precision::CompensatedSum;
use crate::traits::{Statistic, StatisticAccumulator};

/// Sum of the values with extended-precision compensation
///
/// The empty sum is `0.0`. Non-finite values follow IEEE addition: NaN is absorbing
/// and opposite infinities give NaN.
///
/// # Example
///
/// ```
/// use stablestats::descriptive::Sum;
/// use stablestats::traits::{Statistic, StatisticAccumulator};
///
/// let mut sum = Sum::of(&[1e10, 1.0]);
/// sum.accept(-1e10);
/// assert_eq!(sum.value(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum {
    sum: CompensatedSum,
}

impl Sum {
    /// Create an empty sum
    pub const fn new() -> Self {
        Self {
            sum: CompensatedSum::new(),
        }
    }

    /// Sum of `values`, accepted in order
    pub fn of(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }
}

impl Statistic for Sum {
    fn value(&self) -> f64 {
        self.sum.total()
    }
}

impl StatisticAccumulator for Sum {
    fn accept(&mut self, value: f64) {
        self.sum.add(value);
    }

    fn combine(&mut self, other: &Self) -> &mut Self {
        self.sum.add_sum(&other.sum);
        self
    }
}

impl Extend<f64> for Sum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.sum.extend(iter);
    }
}

impl FromIterator<f64> for Sum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}
