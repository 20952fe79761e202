//! Probability distributions
//!
//! Continuous distributions over `f64` and discrete distributions over `i32`, each
//! with density, cumulative and survival functions, inverses, moments, support bounds
//! and an inverse-transform sampler.
//!
//! # Example
//!
//! ```
//! use stablestats::distribution::{BinomialDistribution, DiscreteDistribution};
//!
//! let dist = BinomialDistribution::new(10, 0.7).unwrap();
//! assert!((dist.probability(7) - 0.266_827_932).abs() < 1e-12);
//! assert_eq!(dist.inverse_cumulative_probability(0.5).unwrap(), 7);
//! ```

mod binomial;
mod sampler;
mod saddle_point;
mod uniform;

pub use binomial::BinomialDistribution;
pub use sampler::{
    ContinuousSampler, DiscreteSampler, InverseTransformContinuousSampler,
    InverseTransformDiscreteSampler,
};
pub use uniform::UniformContinuousDistribution;

use crate::math;
use rand::Rng;

/// Error for invalid distribution parameters or arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionError {
    /// Probability outside `[0, 1]`
    InvalidProbability(f64),
    /// Range with `low > high`
    InvalidRange { low: f64, high: f64 },
    /// Negative number of trials
    NegativeTrials(i32),
    /// Bounds that are not finite or not ordered `lower < upper`
    InvalidBounds { lower: f64, upper: f64 },
}

impl core::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DistributionError::InvalidProbability(p) => {
                write!(f, "probability {} is not in [0, 1]", p)
            }
            DistributionError::InvalidRange { low, high } => {
                write!(f, "lower end {} is above upper end {}", low, high)
            }
            DistributionError::NegativeTrials(n) => {
                write!(f, "number of trials {} is negative", n)
            }
            DistributionError::InvalidBounds { lower, upper } => {
                write!(f, "invalid bounds: lower {}, upper {}", lower, upper)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DistributionError {}

/// Check that `p` is a probability
pub(crate) fn check_probability(p: f64) -> Result<f64, DistributionError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(DistributionError::InvalidProbability(p))
    }
}

/// A distribution of a real-valued random variable
pub trait ContinuousDistribution {
    /// Probability density at `x`
    fn density(&self, x: f64) -> f64;

    /// Natural logarithm of the density at `x`
    fn log_density(&self, x: f64) -> f64 {
        math::ln(self.density(x))
    }

    /// `P(X <= x)`
    fn cumulative_probability(&self, x: f64) -> f64;

    /// `P(X > x)`
    fn survival_probability(&self, x: f64) -> f64 {
        1.0 - self.cumulative_probability(x)
    }

    /// `P(x0 < X <= x1)`
    fn probability(&self, x0: f64, x1: f64) -> Result<f64, DistributionError> {
        if x0 > x1 {
            return Err(DistributionError::InvalidRange { low: x0, high: x1 });
        }
        Ok(self.cumulative_probability(x1) - self.cumulative_probability(x0))
    }

    /// Smallest `x` with `P(X <= x) >= p`
    fn inverse_cumulative_probability(&self, p: f64) -> Result<f64, DistributionError>;

    /// Smallest `x` with `P(X > x) <= p`
    fn inverse_survival_probability(&self, p: f64) -> Result<f64, DistributionError> {
        let p = check_probability(p)?;
        self.inverse_cumulative_probability(1.0 - p)
    }

    /// Mean, which may be infinite or NaN for some distributions
    fn mean(&self) -> f64;

    /// Variance, which may be infinite or NaN for some distributions
    fn variance(&self) -> f64;

    /// Infimum of the support
    fn support_lower_bound(&self) -> f64;

    /// Supremum of the support
    fn support_upper_bound(&self) -> f64;

    /// Sampler drawing from this distribution with `rng`
    fn create_sampler<R: Rng>(&self, rng: R) -> InverseTransformContinuousSampler<Self, R>
    where
        Self: Sized + Clone,
    {
        InverseTransformContinuousSampler::new(self.clone(), rng)
    }
}

/// A distribution of an integer-valued random variable
pub trait DiscreteDistribution {
    /// `P(X = x)`
    fn probability(&self, x: i32) -> f64;

    /// Natural logarithm of `P(X = x)`
    fn log_probability(&self, x: i32) -> f64 {
        math::ln(self.probability(x))
    }

    /// `P(x0 < X <= x1)`
    fn probability_range(&self, x0: i32, x1: i32) -> Result<f64, DistributionError> {
        if x0 > x1 {
            return Err(DistributionError::InvalidRange {
                low: x0 as f64,
                high: x1 as f64,
            });
        }
        Ok(self.cumulative_probability(x1) - self.cumulative_probability(x0))
    }

    /// `P(X <= x)`
    fn cumulative_probability(&self, x: i32) -> f64;

    /// `P(X > x)`
    fn survival_probability(&self, x: i32) -> f64 {
        1.0 - self.cumulative_probability(x)
    }

    /// Smallest `x` with `P(X <= x) >= p`
    ///
    /// The default brackets the answer with the support bounds, narrows the bracket
    /// with Chebyshev's inequality when the mean and variance are finite, then bisects
    /// on the cumulative probability.
    fn inverse_cumulative_probability(&self, p: f64) -> Result<i32, DistributionError> {
        let p = check_probability(p)?;
        Ok(search_inverse_cumulative(self, p))
    }

    /// Smallest `x` with `P(X > x) <= p`
    fn inverse_survival_probability(&self, p: f64) -> Result<i32, DistributionError> {
        let p = check_probability(p)?;
        self.inverse_cumulative_probability(1.0 - p)
    }

    /// Mean, which may be infinite or NaN for some distributions
    fn mean(&self) -> f64;

    /// Variance, which may be infinite or NaN for some distributions
    fn variance(&self) -> f64;

    /// Smallest value of the support
    fn support_lower_bound(&self) -> i32;

    /// Largest value of the support
    fn support_upper_bound(&self) -> i32;

    /// Sampler drawing from this distribution with `rng`
    fn create_sampler<R: Rng>(&self, rng: R) -> InverseTransformDiscreteSampler<Self, R>
    where
        Self: Sized + Clone,
    {
        InverseTransformDiscreteSampler::new(self.clone(), rng)
    }
}

/// Bracket-and-bisect inverse of the cumulative probability, `p` in `[0, 1]`
fn search_inverse_cumulative<D: DiscreteDistribution + ?Sized>(dist: &D, p: f64) -> i32 {
    let mut lower = dist.support_lower_bound();
    if p == 0.0 {
        return lower;
    }
    if lower == i32::MIN {
        if dist.cumulative_probability(lower) >= p {
            return lower;
        }
    } else {
        // The answer is in (lower, upper]
        lower -= 1;
    }

    let mut upper = dist.support_upper_bound();
    if p == 1.0 {
        return upper;
    }

    let mu = dist.mean();
    let sigma = math::sqrt(dist.variance());
    if mu.is_finite() && sigma.is_finite() && sigma != 0.0 {
        let mut k = math::sqrt((1.0 - p) / p);
        let t = mu - k * sigma;
        if t > lower as f64 {
            lower = math::ceil(t) as i32 - 1;
        }
        k = 1.0 / k;
        let t = mu + k * sigma;
        if t < upper as f64 {
            upper = math::ceil(t) as i32 - 1;
        }
    }
    log::trace!("inverse cumulative probability {}: bracket ({}, {}]", p, lower, upper);

    while lower + 1 < upper {
        let mid = ((lower as i64 + upper as i64) / 2) as i32;
        if dist.cumulative_probability(mid) >= p {
            upper = mid;
        } else {
            lower = mid;
        }
    }
    upper
}
