//! Inverse transform sampling
//!
//! Draws `u` uniform in `[0, 1)` from the generator and maps it through the inverse
//! cumulative probability of the distribution.

use rand::Rng;

use super::{ContinuousDistribution, DiscreteDistribution};

/// Source of samples from a continuous distribution
pub trait ContinuousSampler {
    /// Draw the next sample
    fn sample(&mut self) -> f64;
}

/// Source of samples from a discrete distribution
pub trait DiscreteSampler {
    /// Draw the next sample
    fn sample(&mut self) -> i32;
}

/// Continuous sampler using the inverse cumulative probability
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stablestats::distribution::{
///     ContinuousDistribution, ContinuousSampler, UniformContinuousDistribution,
/// };
///
/// let dist = UniformContinuousDistribution::new(-1.0, 1.0).unwrap();
/// let mut sampler = dist.create_sampler(StdRng::seed_from_u64(7));
/// let x = sampler.sample();
/// assert!((-1.0..=1.0).contains(&x));
/// ```
#[derive(Clone, Debug)]
pub struct InverseTransformContinuousSampler<D, R> {
    dist: D,
    rng: R,
}

impl<D: ContinuousDistribution, R: Rng> InverseTransformContinuousSampler<D, R> {
    /// Create a sampler for `dist`
    pub fn new(dist: D, rng: R) -> Self {
        Self { dist, rng }
    }

    /// Distribution being sampled
    pub fn distribution(&self) -> &D {
        &self.dist
    }
}

impl<D: ContinuousDistribution, R: Rng> ContinuousSampler for InverseTransformContinuousSampler<D, R> {
    fn sample(&mut self) -> f64 {
        let u: f64 = self.rng.random();
        // u is always a valid probability
        self.dist
            .inverse_cumulative_probability(u)
            .unwrap_or_else(|_| self.dist.support_lower_bound())
    }
}

/// Discrete sampler using the inverse cumulative probability
#[derive(Clone, Debug)]
pub struct InverseTransformDiscreteSampler<D, R> {
    dist: D,
    rng: R,
}

impl<D: DiscreteDistribution, R: Rng> InverseTransformDiscreteSampler<D, R> {
    /// Create a sampler for `dist`
    pub fn new(dist: D, rng: R) -> Self {
        Self { dist, rng }
    }

    /// Distribution being sampled
    pub fn distribution(&self) -> &D {
        &self.dist
    }
}

impl<D: DiscreteDistribution, R: Rng> DiscreteSampler for InverseTransformDiscreteSampler<D, R> {
    fn sample(&mut self) -> i32 {
        let u: f64 = self.rng.random();
        self.dist
            .inverse_cumulative_probability(u)
            .unwrap_or_else(|_| self.dist.support_lower_bound())
    }
}
