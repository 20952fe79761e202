//! Descriptive statistics over streams of `f64`
//!
//! Every statistic can be built three ways: empty with `new()` and fed with
//! [`accept`](crate::traits::StatisticAccumulator::accept), in one batch with `of`, or
//! by merging per-partition results with
//! [`combine`](crate::traits::StatisticAccumulator::combine).
//!
//! # Example
//!
//! ```
//! use stablestats::descriptive::{Mean, Sum, Variance};
//! use stablestats::traits::{Statistic, StatisticAccumulator};
//!
//! let data = [1e10, 1.0, -1e10];
//! assert_eq!(Sum::of(&data).value(), 1.0);
//!
//! let mut mean = Mean::new();
//! for x in [1.0, 2.0, 3.0, 4.0] {
//!     mean.accept(x);
//! }
//! assert_eq!(mean.value(), 2.5);
//!
//! let mut left = Variance::of(&[1.0, 2.0]);
//! left.combine(&Variance::of(&[3.0, 4.0]));
//! assert!((left.value() - 5.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! # Degenerate inputs
//!
//! No statistic returns an error. The empty sum is `0.0`, the empty mean and variance
//! are NaN, and any NaN input makes every statistic NaN.

mod first_moment;
mod mean;
mod moments;
mod shape;
mod statistics;
mod sum;
mod variance;

pub use first_moment::FirstMoment;
pub use mean::Mean;
pub use moments::{SumOfCubedDeviations, SumOfFourthDeviations, SumOfSquaredDeviations};
pub use shape::{Kurtosis, Skewness};
pub use statistics::{add, zero_variance};
pub use sum::Sum;
pub use variance::{StandardDeviation, Variance};
