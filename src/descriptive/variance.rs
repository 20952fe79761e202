//! Variance and standard deviation

use super::moments::SumOfSquaredDeviations;
use crate::math;
use crate::traits::{Statistic, StatisticAccumulator};

/// Variance of the values
///
/// Unbiased (`M2 / (n - 1)`) by default; use [`with_biased`](Variance::with_biased)
/// for the population variance `M2 / n`.
///
/// - no values: NaN
/// - one value: `0.0`
/// - any non-finite value: NaN
///
/// # Example
///
/// ```
/// use stablestats::descriptive::Variance;
/// use stablestats::traits::Statistic;
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((Variance::of(&data).value() - 32.0 / 7.0).abs() < 1e-12);
/// assert!((Variance::of(&data).with_biased(true).value() - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variance {
    m2: SumOfSquaredDeviations,
    biased: bool,
}

impl Variance {
    /// Create an empty unbiased variance
    pub const fn new() -> Self {
        Self {
            m2: SumOfSquaredDeviations::new(),
            biased: false,
        }
    }

    /// Two-pass variance of `values`
    pub fn of(values: &[f64]) -> Self {
        Self {
            m2: SumOfSquaredDeviations::of(values),
            biased: false,
        }
    }

    /// Use the biased (population) estimate
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Whether the biased estimate is used
    pub fn is_biased(&self) -> bool {
        self.biased
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m2.count()
    }

    pub(crate) fn compute(m2: &SumOfSquaredDeviations, biased: bool) -> f64 {
        let n = m2.count();
        if n == 0 || !m2.is_finite() {
            return f64::NAN;
        }
        if n == 1 {
            return 0.0;
        }
        let d = if biased { n } else { n - 1 };
        m2.value() / d as f64
    }
}

impl Statistic for Variance {
    fn value(&self) -> f64 {
        Self::compute(&self.m2, self.biased)
    }
}

impl StatisticAccumulator for Variance {
    fn accept(&mut self, value: f64) {
        self.m2.accept(value);
    }

    /// Merge the values of `other`; the receiver keeps its own bias option
    fn combine(&mut self, other: &Self) -> &mut Self {
        self.m2.combine(&other.m2);
        self
    }
}

impl Extend<f64> for Variance {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.m2.accept(value);
        }
    }
}

/// Standard deviation of the values: the square root of the [`Variance`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardDeviation {
    m2: SumOfSquaredDeviations,
    biased: bool,
}

impl StandardDeviation {
    /// Create an empty unbiased standard deviation
    pub const fn new() -> Self {
        Self {
            m2: SumOfSquaredDeviations::new(),
            biased: false,
        }
    }

    /// Two-pass standard deviation of `values`
    pub fn of(values: &[f64]) -> Self {
        Self {
            m2: SumOfSquaredDeviations::of(values),
            biased: false,
        }
    }

    /// Use the biased (population) estimate of the variance
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Whether the biased estimate is used
    pub fn is_biased(&self) -> bool {
        self.biased
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m2.count()
    }
}

impl Statistic for StandardDeviation {
    fn value(&self) -> f64 {
        math::sqrt(Variance::compute(&self.m2, self.biased))
    }
}

impl StatisticAccumulator for StandardDeviation {
    fn accept(&mut self, value: f64) {
        self.m2.accept(value);
    }

    fn combine(&mut self, other: &Self) -> &mut Self {
        self.m2.combine(&other.m2);
        self
    }
}

impl Extend<f64> for StandardDeviation {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.m2.accept(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_empty_and_single() {
        assert!(Variance::new().value().is_nan());
        assert!(StandardDeviation::new().value().is_nan());

        let mut v = Variance::new();
        v.accept(3.0);
        assert_eq!(v.value(), 0.0);
        assert_eq!(v.with_biased(true).value(), 0.0);
        assert_eq!(StandardDeviation::of(&[3.0]).value(), 0.0);
    }

    #[test]
    fn test_values() {
        let mut v = Variance::new();
        v.extend(DATA);
        assert!((v.value() - 32.0 / 7.0).abs() < 1e-12);
        assert!((v.with_biased(true).value() - 4.0).abs() < 1e-12);

        let sd = StandardDeviation::of(&DATA).with_biased(true);
        assert!(sd.is_biased());
        assert!((sd.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite() {
        assert!(Variance::of(&[1.0, f64::INFINITY]).value().is_nan());
        assert!(Variance::of(&[f64::NAN]).value().is_nan());

        let mut v = Variance::new();
        v.extend([1.0, 2.0, f64::NEG_INFINITY]);
        assert!(v.value().is_nan());
    }

    #[test]
    fn test_combine_keeps_receiver_option() {
        let mut a = Variance::of(&DATA[..3]).with_biased(true);
        let b = Variance::of(&DATA[3..]);
        a.combine(&b);
        assert!(a.is_biased());
        assert_eq!(a.count(), 8);
        assert!((a.value() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_large_offset() {
        // Shifting the data must not change the variance
        let shifted: [f64; 8] = DATA.map(|x| x + 1e9);
        assert!((Variance::of(&shifted).value() - 32.0 / 7.0).abs() < 1e-6);

        let mut v = Variance::new();
        v.extend(shifted);
        assert!((v.value() - 32.0 / 7.0).abs() < 1e-6);
    }
}
