//! First raw moment (running mean)
//!
//! Uses the updating one-pass recursion (Chan, Golub & LeVeque 1983, eq. 1.3a)
//!
//! ```text
//! m(i+1) = m(i) + (x - m(i)) / (i + 1)
//! ```
//!
//! with the deviation computed at half scale so no finite input can overflow. The
//! batch constructor uses the corrected two-pass algorithm (Ling 1974).

/// Running first moment of a stream of values
///
/// Holds, besides the mean and count, the half-scale deviation terms of the latest
/// update so that the higher moments built on top of it can reuse them.
///
/// Non-finite inputs are accumulated separately with plain IEEE addition, which
/// gives the mean its IEEE semantics: `[+inf, +inf]` is `+inf`, `[+inf, -inf]` is
/// NaN, and NaN is absorbing.
///
/// After a non-finite input the state itself is non-finite, so it only survives
/// serialization formats that encode infinities and NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstMoment {
    /// Mean of the finite values
    m1: f64,
    /// Number of values seen
    n: u64,
    /// Half deviation of the last value from the previous mean: `x/2 - m/2`
    dev: f64,
    /// `dev / n` for the last update
    n_dev: f64,
    /// IEEE sum of the non-finite values seen
    non_finite: f64,
}

impl FirstMoment {
    /// Create an empty moment
    pub const fn new() -> Self {
        Self {
            m1: 0.0,
            n: 0,
            dev: 0.0,
            n_dev: 0.0,
            non_finite: 0.0,
        }
    }

    /// Corrected two-pass first moment of `values`
    ///
    /// The one-pass recursion gives a provisional mean `m`; the mean of the residuals
    /// `x - m` is then added to cancel its first-order error. The result is in general
    /// more accurate than, and can differ from, accepting the same values one at a
    /// time.
    pub fn of(values: &[f64]) -> Self {
        let mut moment = Self::new();
        if values.is_empty() {
            return moment;
        }
        moment.extend(values.iter().copied());

        let xbar = moment.first_moment();
        if !xbar.is_finite() {
            return moment;
        }
        let correction: f64 = values.iter().map(|&x| x - xbar).sum();
        // Residuals of extreme values may overflow
        if correction.is_finite() {
            moment.m1 += correction / values.len() as f64;
        }
        moment
    }

    /// Update with a value
    pub fn accept(&mut self, value: f64) {
        self.n += 1;
        let dev = value * 0.5 - self.m1 * 0.5;
        if dev.is_finite() {
            self.dev = dev;
            self.n_dev = dev / self.n as f64;
            self.m1 += self.n_dev * 2.0;
        } else {
            self.non_finite += value;
            self.dev = f64::NAN;
            self.n_dev = f64::NAN;
        }
    }

    /// Mean of all values, NaN if empty
    pub fn first_moment(&self) -> f64 {
        if self.n == 0 {
            return f64::NAN;
        }
        if self.non_finite != 0.0 {
            return self.non_finite;
        }
        self.m1
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.n
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Whether every value seen was finite
    pub fn is_finite(&self) -> bool {
        self.non_finite == 0.0
    }

    /// Half deviation of the last accepted value from the previous mean
    pub(crate) fn half_dev(&self) -> f64 {
        self.dev
    }

    /// Half deviation of the last accepted value divided by the new count
    pub(crate) fn half_n_dev(&self) -> f64 {
        self.n_dev
    }

    /// Mean of the finite values, valid when the moment is not empty
    pub(crate) fn finite_mean(&self) -> f64 {
        self.m1
    }

    /// Merge another moment into this one
    ///
    /// The merged mean is the count-weighted mean of both sides, computed as a
    /// half-scale correction of the side with the larger count. An empty side leaves
    /// the other unchanged.
    pub fn combine(&mut self, other: &FirstMoment) -> &mut Self {
        if other.n == 0 {
            return self;
        }
        if self.n == 0 {
            *self = *other;
            return self;
        }
        let (n1, n2) = (self.n, other.n);
        let n = n1 + n2;
        self.m1 = if n2 <= n1 {
            combine_means(self.m1, other.m1, n2, n)
        } else {
            combine_means(other.m1, self.m1, n1, n)
        };
        self.n = n;
        self.non_finite += other.non_finite;
        self
    }
}

/// `m + (m_other - m) * n_other / n` with the difference at half scale
#[inline]
fn combine_means(m: f64, m_other: f64, n_other: u64, n: u64) -> f64 {
    let half_diff = m_other * 0.5 - m * 0.5;
    m + half_diff * (2.0 * n_other as f64 / n as f64)
}

impl Extend<f64> for FirstMoment {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}
