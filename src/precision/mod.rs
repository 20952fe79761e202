//! Extended-precision arithmetic primitives
//!
//! Stateless error-free transformations and the [`CompensatedSum`] accumulator built
//! on them. Everything else in the crate that needs to control rounding error goes
//! through this module.
//!
//! # Example
//!
//! ```
//! use stablestats::precision::{sqrt2xx, CompensatedSum};
//!
//! let sum: CompensatedSum = [1e10, 1.0, -1e10].into_iter().sum();
//! assert_eq!(sum.total(), 1.0);
//!
//! // No overflow of the intermediate 2x^2
//! assert_eq!(sqrt2xx(1e300), 1e300 * core::f64::consts::SQRT_2);
//! ```

mod compensated;
mod extended;

pub use compensated::CompensatedSum;
pub use extended::{
    fast_two_sum, high_part, square_low, sqrt2xx, two_product_low, two_sum, two_sum_low,
};
