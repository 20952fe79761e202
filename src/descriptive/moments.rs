//! Sums of powers of deviations from the mean (second to fourth central moments)
//!
//! Each moment owns the one below it and reuses the half-scale deviation of the
//! [`FirstMoment`] update. Updates follow Welford (1962) and Terriberry (2007);
//! merges use the pairwise formulas of Chan et al. (1979) and Pébay (2008).
//!
//! With `d = x - mean`, `n` the new count, `t = d * (d / n) * (n - 1)`:
//!
//! ```text
//! M4 += t (d/n)^2 (n^2 - 3n + 3) + 6 (d/n)^2 M2 - 4 (d/n) M3
//! M3 += t (d/n) (n - 2) - 3 (d/n) M2
//! M2 += t
//! ```

use super::first_moment::FirstMoment;

/// Running sum of squared deviations from the mean (`M2`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumOfSquaredDeviations {
    m1: FirstMoment,
    sum_sq: f64,
}

impl SumOfSquaredDeviations {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            m1: FirstMoment::new(),
            sum_sq: 0.0,
        }
    }

    /// Two-pass sum of squared deviations of `values`
    ///
    /// Uses the corrected two-pass mean and removes the residual bias with the
    /// correction `(sum of d)^2 / n`.
    pub fn of(values: &[f64]) -> Self {
        let m1 = FirstMoment::of(values);
        if m1.is_empty() {
            return Self::new();
        }
        let xbar = m1.first_moment();
        if !xbar.is_finite() {
            return Self { m1, sum_sq: f64::NAN };
        }
        let mut s = 0.0;
        let mut c = 0.0;
        for &x in values {
            let d = x - xbar;
            c += d;
            s += d * d;
        }
        Self {
            m1,
            sum_sq: s - c * c / values.len() as f64,
        }
    }

    /// Update with a value
    pub fn accept(&mut self, value: f64) {
        self.m1.accept(value);
        self.sum_sq += self.term();
    }

    /// `d * (d / n) * (n - 1)` for the last update
    #[inline]
    fn term(&self) -> f64 {
        let n = self.m1.count() as f64;
        4.0 * (n - 1.0) * self.m1.half_dev() * self.m1.half_n_dev()
    }

    /// Full-scale `d / n` for the last update
    #[inline]
    fn delta_n(&self) -> f64 {
        2.0 * self.m1.half_n_dev()
    }

    /// Sum of squared deviations from the mean
    pub fn value(&self) -> f64 {
        self.sum_sq
    }

    /// Mean of the values, NaN if empty
    pub fn mean(&self) -> f64 {
        self.m1.first_moment()
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m1.count()
    }

    /// Whether every value seen was finite
    pub fn is_finite(&self) -> bool {
        self.m1.is_finite()
    }

    /// Merge another accumulator into this one
    pub fn combine(&mut self, other: &Self) -> &mut Self {
        if other.count() == 0 {
            return self;
        }
        if self.count() == 0 {
            *self = *other;
            return self;
        }
        let w = Weights::new(&self.m1, &other.m1);
        self.sum_sq += other.sum_sq + w.delta * w.delta * w.na * w.nb / w.n;
        self.m1.combine(&other.m1);
        self
    }
}

/// Running sum of cubed deviations from the mean (`M3`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumOfCubedDeviations {
    m2: SumOfSquaredDeviations,
    sum_cubed: f64,
}

impl SumOfCubedDeviations {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            m2: SumOfSquaredDeviations::new(),
            sum_cubed: 0.0,
        }
    }

    /// Two-pass sum of cubed deviations of `values`
    pub fn of(values: &[f64]) -> Self {
        let m2 = SumOfSquaredDeviations::of(values);
        let sum_cubed = sum_of_powers(values, &m2, 3);
        Self { m2, sum_cubed }
    }

    /// Update with a value
    pub fn accept(&mut self, value: f64) {
        let m2 = self.m2.sum_sq;
        self.m2.accept(value);
        let n = self.m2.count() as f64;
        let dn = self.m2.delta_n();
        self.sum_cubed += self.m2.term() * dn * (n - 2.0) - 3.0 * dn * m2;
    }

    /// Sum of cubed deviations from the mean
    pub fn value(&self) -> f64 {
        self.sum_cubed
    }

    /// Sum of squared deviations from the mean
    pub fn sum_of_squared_deviations(&self) -> f64 {
        self.m2.value()
    }

    /// Mean of the values, NaN if empty
    pub fn mean(&self) -> f64 {
        self.m2.mean()
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m2.count()
    }

    /// Whether every value seen was finite
    pub fn is_finite(&self) -> bool {
        self.m2.is_finite()
    }

    /// Merge another accumulator into this one
    pub fn combine(&mut self, other: &Self) -> &mut Self {
        if other.count() == 0 {
            return self;
        }
        if self.count() == 0 {
            *self = *other;
            return self;
        }
        let w = Weights::new(&self.m2.m1, &other.m2.m1);
        let (m2a, m2b) = (self.m2.sum_sq, other.m2.sum_sq);
        self.sum_cubed += other.sum_cubed
            + w.delta * w.delta * w.delta * w.na * w.nb * (w.na - w.nb) / (w.n * w.n)
            + 3.0 * w.delta * (w.na * m2b - w.nb * m2a) / w.n;
        self.m2.combine(&other.m2);
        self
    }
}

/// Running sum of fourth-power deviations from the mean (`M4`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumOfFourthDeviations {
    m3: SumOfCubedDeviations,
    sum_fourth: f64,
}

impl SumOfFourthDeviations {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            m3: SumOfCubedDeviations::new(),
            sum_fourth: 0.0,
        }
    }

    /// Two-pass sum of fourth-power deviations of `values`
    pub fn of(values: &[f64]) -> Self {
        let m3 = SumOfCubedDeviations::of(values);
        let sum_fourth = sum_of_powers(values, &m3.m2, 4);
        Self { m3, sum_fourth }
    }

    /// Update with a value
    pub fn accept(&mut self, value: f64) {
        let m2 = self.m3.m2.sum_sq;
        let m3 = self.m3.sum_cubed;
        self.m3.accept(value);
        let inner = &self.m3.m2;
        let n = inner.count() as f64;
        let dn = inner.delta_n();
        let dn2 = dn * dn;
        self.sum_fourth +=
            inner.term() * dn2 * (n * n - 3.0 * n + 3.0) + 6.0 * dn2 * m2 - 4.0 * dn * m3;
    }

    /// Sum of fourth-power deviations from the mean
    pub fn value(&self) -> f64 {
        self.sum_fourth
    }

    /// Sum of cubed deviations from the mean
    pub fn sum_of_cubed_deviations(&self) -> f64 {
        self.m3.value()
    }

    /// Sum of squared deviations from the mean
    pub fn sum_of_squared_deviations(&self) -> f64 {
        self.m3.sum_of_squared_deviations()
    }

    /// Mean of the values, NaN if empty
    pub fn mean(&self) -> f64 {
        self.m3.mean()
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.m3.count()
    }

    /// Whether every value seen was finite
    pub fn is_finite(&self) -> bool {
        self.m3.is_finite()
    }

    /// Merge another accumulator into this one
    pub fn combine(&mut self, other: &Self) -> &mut Self {
        if other.count() == 0 {
            return self;
        }
        if self.count() == 0 {
            *self = *other;
            return self;
        }
        let w = Weights::new(&self.m3.m2.m1, &other.m3.m2.m1);
        let (m2a, m2b) = (self.m3.m2.sum_sq, other.m3.m2.sum_sq);
        let (m3a, m3b) = (self.m3.sum_cubed, other.m3.sum_cubed);
        let d2 = w.delta * w.delta;
        let n2 = w.n * w.n;
        self.sum_fourth += other.sum_fourth
            + d2 * d2 * w.na * w.nb * (w.na * w.na - w.na * w.nb + w.nb * w.nb) / (n2 * w.n)
            + 6.0 * d2 * (w.na * w.na * m2b + w.nb * w.nb * m2a) / n2
            + 4.0 * w.delta * (w.na * m3b - w.nb * m3a) / w.n;
        self.m3.combine(&other.m3);
        self
    }
}

/// Counts and mean difference of two non-empty sides of a merge
struct Weights {
    na: f64,
    nb: f64,
    n: f64,
    /// `mean_b - mean_a`, formed from halves
    delta: f64,
}

impl Weights {
    fn new(a: &FirstMoment, b: &FirstMoment) -> Self {
        let na = a.count() as f64;
        let nb = b.count() as f64;
        Self {
            na,
            nb,
            n: na + nb,
            delta: 2.0 * (b.finite_mean() * 0.5 - a.finite_mean() * 0.5),
        }
    }
}

/// `sum((x - mean)^k)` around the two-pass mean of `m2`
fn sum_of_powers(values: &[f64], m2: &SumOfSquaredDeviations, k: i32) -> f64 {
    if m2.count() == 0 {
        return 0.0;
    }
    let xbar = m2.mean();
    if !xbar.is_finite() {
        return f64::NAN;
    }
    values
        .iter()
        .map(|&x| {
            let d = x - xbar;
            let d2 = d * d;
            if k == 3 {
                d2 * d
            } else {
                d2 * d2
            }
        })
        .sum()
}
