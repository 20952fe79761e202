//! Shape statistics: skewness and excess kurtosis
//!
//! Both are bias-corrected sample estimates by default. With `with_biased(true)` they
//! return the plain moment ratios `g1 = m3 / m2^1.5` and `g2 = m4 / m2^2 - 3`.

use super::moments::{SumOfCubedDeviations, SumOfFourthDeviations};
use super::statistics::zero_variance;
use crate::math;
use crate::traits::{Statistic, StatisticAccumulator};

/// Sample skewness
///
/// ```text
/// G1 = g1 * sqrt(n (n - 1)) / (n - 2)
/// ```
///
/// NaN for fewer than 3 values or any non-finite value; `0.0` when the variance is
/// zero relative to the mean.
///
/// # Example
///
/// ```
/// use stablestats::descriptive::Skewness;
/// use stablestats::traits::Statistic;
///
/// let skew = Skewness::of(&[1.0, 2.0, 10.0]).value();
/// assert!((skew - 1.652_316_74).abs() < 1e-8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skewness {
    m3: SumOfCubedDeviations,
    biased: bool,
}

impl Skewness {
    /// Create an empty skewness
    pub const fn new() -> Self {
        Self {
            m3: SumOfCubedDeviations::new(),
            biased: false,
        }
    }

    /// Two-pass skewness of `values`
    pub fn of(values: &[f64]) -> Self {
        Self {
            m3: SumOfCubedDeviations::of(values),
            biased: false,
        }
    }

    /// Return the uncorrected moment ratio `g1`
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m3.count()
    }
}

impl Statistic for Skewness {
    fn value(&self) -> f64 {
        let n = self.m3.count();
        if n < 3 || !self.m3.is_finite() {
            return f64::NAN;
        }
        let n = n as f64;
        let m2 = self.m3.sum_of_squared_deviations() / n;
        if zero_variance(self.m3.mean(), m2) {
            return 0.0;
        }
        let m3 = self.m3.value() / n;
        let g1 = m3 / (m2 * math::sqrt(m2));
        if self.biased {
            g1
        } else {
            g1 * math::sqrt(n * (n - 1.0)) / (n - 2.0)
        }
    }
}

impl StatisticAccumulator for Skewness {
    fn accept(&mut self, value: f64) {
        self.m3.accept(value);
    }

    fn combine(&mut self, other: &Self) -> &mut Self {
        self.m3.combine(&other.m3);
        self
    }
}

impl Extend<f64> for Skewness {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.m3.accept(value);
        }
    }
}

/// Sample excess kurtosis
///
/// ```text
/// G2 = n (n + 1) (n - 1) M4 / ((n - 2) (n - 3) M2^2) - 3 (n - 1)^2 / ((n - 2) (n - 3))
/// ```
///
/// NaN for fewer than 4 values or any non-finite value; `0.0` when the variance is
/// zero relative to the mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kurtosis {
    m4: SumOfFourthDeviations,
    biased: bool,
}

impl Kurtosis {
    /// Create an empty kurtosis
    pub const fn new() -> Self {
        Self {
            m4: SumOfFourthDeviations::new(),
            biased: false,
        }
    }

    /// Two-pass kurtosis of `values`
    pub fn of(values: &[f64]) -> Self {
        Self {
            m4: SumOfFourthDeviations::of(values),
            biased: false,
        }
    }

    /// Return the uncorrected moment ratio `g2`
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m4.count()
    }
}

impl Statistic for Kurtosis {
    fn value(&self) -> f64 {
        let n = self.m4.count();
        if n < 4 || !self.m4.is_finite() {
            return f64::NAN;
        }
        let n = n as f64;
        let sum_sq = self.m4.sum_of_squared_deviations();
        if zero_variance(self.m4.mean(), sum_sq / n) {
            return 0.0;
        }
        let m4 = self.m4.value();
        if self.biased {
            return n * m4 / (sum_sq * sum_sq) - 3.0;
        }
        let d = (n - 2.0) * (n - 3.0);
        n * (n + 1.0) * (n - 1.0) * m4 / (d * sum_sq * sum_sq)
            - 3.0 * (n - 1.0) * (n - 1.0) / d
    }
}

impl StatisticAccumulator for Kurtosis {
    fn accept(&mut self, value: f64) {
        self.m4.accept(value);
    }

    fn combine(&mut self, other: &Self) -> &mut Self {
        self.m4.combine(&other.m4);
        self
    }
}

impl Extend<f64> for Kurtosis {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.m4.accept(value);
        }
    }
}
