//! Continuous uniform distribution

use super::{check_probability, ContinuousDistribution, DistributionError};

/// Uniform distribution over `[lower, upper]`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformContinuousDistribution {
    lower: f64,
    upper: f64,
    /// `(upper - lower) / 2`, finite for any finite bounds
    half_width: f64,
    /// `1 / (upper - lower)`
    density: f64,
}

impl UniformContinuousDistribution {
    /// Create a uniform distribution
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidBounds`] unless both bounds are finite and
    /// `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !(lower < upper) || !lower.is_finite() || !upper.is_finite() {
            log::debug!("uniform rejected: bounds [{}, {}]", lower, upper);
            return Err(DistributionError::InvalidBounds { lower, upper });
        }
        let half_width = 0.5 * upper - 0.5 * lower;
        Ok(Self {
            lower,
            upper,
            half_width,
            density: 0.5 / half_width,
        })
    }
}

impl ContinuousDistribution for UniformContinuousDistribution {
    fn density(&self, x: f64) -> f64 {
        if x < self.lower || x > self.upper {
            0.0
        } else {
            self.density
        }
    }

    fn cumulative_probability(&self, x: f64) -> f64 {
        if x <= self.lower {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            (0.5 * x - 0.5 * self.lower) / self.half_width
        }
    }

    fn survival_probability(&self, x: f64) -> f64 {
        if x <= self.lower {
            1.0
        } else if x >= self.upper {
            0.0
        } else {
            (0.5 * self.upper - 0.5 * x) / self.half_width
        }
    }

    fn inverse_cumulative_probability(&self, p: f64) -> Result<f64, DistributionError> {
        let p = check_probability(p)?;
        let x = (1.0 - p) * self.lower + p * self.upper;
        // Rounding must not leave the support
        Ok(x.min(self.upper))
    }

    fn inverse_survival_probability(&self, p: f64) -> Result<f64, DistributionError> {
        let p = check_probability(p)?;
        let x = p * self.lower + (1.0 - p) * self.upper;
        Ok(x.max(self.lower))
    }

    fn mean(&self) -> f64 {
        0.5 * self.lower + 0.5 * self.upper
    }

    fn variance(&self) -> f64 {
        self.half_width * self.half_width / 3.0
    }

    fn support_lower_bound(&self) -> f64 {
        self.lower
    }

    fn support_upper_bound(&self) -> f64 {
        self.upper
    }
}
