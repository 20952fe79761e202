//! Compensated summation
//!
//! Running sum where the rounding error of every addition is captured exactly with
//! [`two_sum`](super::two_sum), accumulated with the pending compensation and folded
//! back into the total. The residual of that fold is carried to the next addition.

use core::ops::AddAssign;

use super::extended::two_sum_low;

/// Running sum with an error compensation term
///
/// The reported total is the IEEE sum of all values to first order; the pending
/// compensation is applied to the next addition rather than to the reported result.
///
/// - The empty sum is `0.0`.
/// - NaN is absorbing: once the total is NaN it stays NaN.
/// - Infinities follow IEEE addition (`+inf + -inf` is NaN).
///
/// # Example
///
/// ```
/// use stablestats::precision::CompensatedSum;
///
/// let mut naive = 0.0;
/// let mut sum = CompensatedSum::new();
/// for _ in 0..10 {
///     naive += 0.1;
///     sum.add(0.1);
/// }
/// assert_ne!(naive, 1.0);
/// assert_eq!(sum.total(), 1.0);
/// ```
///
/// # Merging
///
/// Two sums combine through the same error-free discipline; the other sum's
/// compensation is never dropped:
///
/// ```
/// use stablestats::precision::CompensatedSum;
///
/// let mut a: CompensatedSum = [1e16, 1.0].into_iter().sum();
/// let b: CompensatedSum = [1.0].into_iter().sum();
/// a.add_sum(&b);
/// assert_eq!(a.total(), 1e16 + 2.0);
/// ```
///
/// A sum that has overflowed or absorbed a non-finite value stores it as its total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompensatedSum {
    /// Running total
    total: f64,
    /// Rounding error not yet folded into the total
    compensation: f64,
}

impl CompensatedSum {
    /// Create an empty sum
    pub const fn new() -> Self {
        Self {
            total: 0.0,
            compensation: 0.0,
        }
    }

    /// Create a sum holding a single value
    pub const fn of(value: f64) -> Self {
        Self {
            total: value,
            compensation: 0.0,
        }
    }

    /// Add a value
    pub fn add(&mut self, value: f64) -> &mut Self {
        let s = self.total + value;
        if !s.is_finite() {
            // NaN and infinities follow plain IEEE addition from here on
            self.total = s;
            self.compensation = 0.0;
            return self;
        }
        let c = self.compensation + two_sum_low(self.total, value, s);
        let t = s + c;
        self.compensation = if t.is_finite() { two_sum_low(s, c, t) } else { 0.0 };
        self.total = t;
        self
    }

    /// Add the contents of another sum
    pub fn add_sum(&mut self, other: &CompensatedSum) -> &mut Self {
        self.add(other.total);
        self.add(other.compensation)
    }

    /// Current total
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Rounding error that will be folded into the next addition
    pub fn compensation(&self) -> f64 {
        self.compensation
    }
}

impl From<f64> for CompensatedSum {
    fn from(value: f64) -> Self {
        Self::of(value)
    }
}

impl AddAssign<f64> for CompensatedSum {
    fn add_assign(&mut self, value: f64) {
        self.add(value);
    }
}

impl AddAssign<&CompensatedSum> for CompensatedSum {
    fn add_assign(&mut self, other: &CompensatedSum) {
        self.add_sum(other);
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl core::iter::Sum<f64> for CompensatedSum {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}

impl<'a> core::iter::Sum<&'a f64> for CompensatedSum {
    fn sum<I: Iterator<Item = &'a f64>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
