//! Helpers shared by the descriptive statistics

use crate::traits::StatisticAccumulator;

/// Relative threshold under which a variance is treated as zero
const ZERO_VARIANCE_THRESHOLD: f64 = 1e-15;

/// Accept every value of `values` into `statistic`, in order
///
/// # Example
///
/// ```
/// use stablestats::descriptive::{add, Sum};
/// use stablestats::traits::Statistic;
///
/// let sum = add(Sum::new(), &[1.0, 2.0, 3.0]);
/// assert_eq!(sum.value(), 6.0);
/// ```
pub fn add<S: StatisticAccumulator>(mut statistic: S, values: &[f64]) -> S {
    for &value in values {
        statistic.accept(value);
    }
    statistic
}

/// Whether the second central moment `m2` is zero relative to the mean `m1`
///
/// True when `m2 <= (1e-15 * m1)^2`: the spread is below the round-off of the mean,
/// so shape statistics dividing by it would only amplify noise.
pub fn zero_variance(m1: f64, m2: f64) -> bool {
    let t = ZERO_VARIANCE_THRESHOLD * m1;
    m2 <= t * t
}
