//! Binomial distribution

use super::saddle_point::log_binomial_probability;
use super::{check_probability, DiscreteDistribution, DistributionError};
use crate::math;
use crate::precision::CompensatedSum;

/// Relative size below which a tail term no longer changes the tail sum
const TAIL_THRESHOLD: f64 = 8.673_617_379_884_035e-19; // 2^-60

/// Number of successes in `n` independent trials with success probability `p`
///
/// ```text
/// P(X = x) = C(n, x) p^x (1 - p)^(n - x)
/// ```
///
/// Masses use Loader's saddle point expansion, which stays accurate for millions of
/// trials. Cumulative and survival probabilities sum the smaller tail outward from
/// `x` with the mass ratio recurrence.
///
/// # Example
///
/// ```
/// use stablestats::distribution::{BinomialDistribution, DiscreteDistribution};
///
/// let dist = BinomialDistribution::new(10, 0.7).unwrap();
/// assert!((dist.cumulative_probability(5) - 0.150_268_332_6).abs() < 1e-12);
/// assert_eq!(dist.support_upper_bound(), 10);
/// assert!(BinomialDistribution::new(-1, 0.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialDistribution {
    trials: i32,
    p: f64,
    /// `1 - p`
    q: f64,
}

impl BinomialDistribution {
    /// Create a binomial distribution
    ///
    /// # Errors
    ///
    /// [`DistributionError::NegativeTrials`] if `trials < 0` and
    /// [`DistributionError::InvalidProbability`] if `p` is not in `[0, 1]`.
    pub fn new(trials: i32, p: f64) -> Result<Self, DistributionError> {
        if trials < 0 {
            log::debug!("binomial rejected: {} trials", trials);
            return Err(DistributionError::NegativeTrials(trials));
        }
        let p = check_probability(p).inspect_err(|_| {
            log::debug!("binomial rejected: probability of success {}", p);
        })?;
        Ok(Self {
            trials,
            p,
            q: 1.0 - p,
        })
    }

    /// Number of trials
    pub fn trials(&self) -> i32 {
        self.trials
    }

    /// Probability of success of each trial
    pub fn probability_of_success(&self) -> f64 {
        self.p
    }

    /// `P(X <= x)` for `x` inside the support, summed downward
    fn lower_tail(&self, x: i32) -> f64 {
        // p / q is finite here: p == 1 has a single-point support
        let ratio = self.q / self.p;
        let mut sum = CompensatedSum::new();
        let mut k = x;
        let mut term = self.probability(k);
        while term > 0.0 {
            sum.add(term);
            if k == 0 || term <= sum.total() * TAIL_THRESHOLD {
                break;
            }
            term *= k as f64 / (self.trials - k + 1) as f64 * ratio;
            k -= 1;
        }
        sum.total()
    }

    /// `P(X > x)` for `x` inside the support, summed upward
    fn upper_tail(&self, x: i32) -> f64 {
        let ratio = self.p / self.q;
        let mut sum = CompensatedSum::new();
        let mut k = x + 1;
        let mut term = self.probability(k);
        while term > 0.0 {
            sum.add(term);
            if k == self.trials || term <= sum.total() * TAIL_THRESHOLD {
                break;
            }
            term *= (self.trials - k) as f64 / (k + 1) as f64 * ratio;
            k += 1;
        }
        sum.total()
    }

    /// Whether `x` lies below the mean, so the lower tail is the smaller one
    fn in_lower_tail(&self, x: i32) -> bool {
        (x as f64) < self.mean()
    }
}

impl DiscreteDistribution for BinomialDistribution {
    fn probability(&self, x: i32) -> f64 {
        let lp = self.log_probability(x);
        if lp == f64::NEG_INFINITY {
            0.0
        } else {
            math::exp(lp)
        }
    }

    fn log_probability(&self, x: i32) -> f64 {
        let n = self.trials;
        if x < 0 || x > n {
            return f64::NEG_INFINITY;
        }
        if n == 0 {
            return 0.0;
        }
        if self.p == 0.0 {
            return if x == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.q == 0.0 {
            return if x == n { 0.0 } else { f64::NEG_INFINITY };
        }
        if x == 0 {
            return n as f64 * math::ln_1p(-self.p);
        }
        if x == n {
            return n as f64 * math::ln(self.p);
        }
        log_binomial_probability(x, n, self.p, self.q)
    }

    fn cumulative_probability(&self, x: i32) -> f64 {
        if x < self.support_lower_bound() {
            return 0.0;
        }
        if x >= self.support_upper_bound() {
            return 1.0;
        }
        if self.in_lower_tail(x) {
            self.lower_tail(x)
        } else {
            1.0 - self.upper_tail(x)
        }
    }

    fn survival_probability(&self, x: i32) -> f64 {
        if x < self.support_lower_bound() {
            return 1.0;
        }
        if x >= self.support_upper_bound() {
            return 0.0;
        }
        if self.in_lower_tail(x) {
            1.0 - self.lower_tail(x)
        } else {
            self.upper_tail(x)
        }
    }

    fn mean(&self) -> f64 {
        self.trials as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.trials as f64 * self.p * self.q
    }

    fn support_lower_bound(&self) -> i32 {
        if self.p < 1.0 {
            0
        } else {
            self.trials
        }
    }

    fn support_upper_bound(&self) -> i32 {
        if self.p > 0.0 {
            self.trials
        } else {
            0
        }
    }
}
