//! # Stablestats
//!
//! Numerically stable, mergeable statistics for Rust.
//!
//! Stablestats computes descriptive statistics over streams of `f64` with controlled
//! rounding error, and evaluates discrete and continuous probability distributions.
//!
//! ## Features
//!
//! - **Compensated Summation**: Sums that recover the rounding error of every addition
//! - **Overflow-Free Moments**: Running mean and central moments that never overflow
//!   for finite input
//! - **Full Mergeability**: Every accumulator can be built per partition and combined
//! - **Extended Precision**: Error-free transformations and a correctly rounded
//!   `sqrt(2x²)`
//! - **Distributions**: Binomial and uniform distributions with inverse-transform
//!   sampling
//!
//! ## Quick Start
//!
//! ```rust
//! use stablestats::prelude::*;
//!
//! let mut sum = Sum::new();
//! for x in [1e10, 1.0, -1e10] {
//!     sum.accept(x);
//! }
//! assert_eq!(sum.value(), 1.0);
//!
//! let mean = Mean::of(&[1.0, 2.0, 3.0, 4.0]);
//! println!("Mean: {}", mean.value());
//! ```
//!
//! ## Distributed Computing
//!
//! All accumulators implement
//! [`StatisticAccumulator`](traits::StatisticAccumulator), whose `combine` merges the
//! state of another accumulator, so partitions can be processed independently:
//!
//! ```rust
//! use stablestats::descriptive::Variance;
//! use stablestats::traits::{Statistic, StatisticAccumulator};
//!
//! let mut worker1 = Variance::new();
//! let mut worker2 = Variance::new();
//!
//! // Each worker processes its partition
//! worker1.extend([1.0, 2.0, 3.0]);
//! worker2.extend([4.0, 5.0, 6.0]);
//!
//! // Merge results
//! worker1.combine(&worker2);
//! assert!((worker1.value() - 3.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! Families:
//! - `descriptive` (default): Sum, Mean, Variance and the higher moments
//! - `distribution` (default): Probability distributions and samplers (needs `rand`)
//! - `full`: Enable all families and serde
//!
//! Platform features:
//! - `std` (default): Standard library support; without it math goes through `libm`
//! - `serde`: Enable serialization. Accumulators that have seen a non-finite value
//!   hold infinities or NaN, which formats without a representation for them (such
//!   as JSON) cannot read back

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod math;

// Core traits and arithmetic always available
pub mod precision;
pub mod traits;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod descriptive;

#[cfg(feature = "distribution")]
#[cfg_attr(docsrs, doc(cfg(feature = "distribution")))]
pub mod distribution;

pub mod prelude {
    pub use crate::precision::{sqrt2xx, CompensatedSum};
    pub use crate::traits::*;

    #[cfg(feature = "descriptive")]
    pub use crate::descriptive::{
        Kurtosis, Mean, Skewness, StandardDeviation, Sum, Variance,
    };

    #[cfg(feature = "distribution")]
    pub use crate::distribution::{
        BinomialDistribution, ContinuousDistribution, ContinuousSampler, DiscreteDistribution,
        DiscreteSampler, DistributionError, UniformContinuousDistribution,
    };
}

#[cfg(feature = "descriptive")]
pub use descriptive::{Mean, Sum, Variance};

#[cfg(feature = "distribution")]
pub use distribution::DistributionError;
