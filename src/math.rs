//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.
//! Everything but `sqrt` only serves the distributions.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(all(feature = "distribution", feature = "std"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(all(feature = "distribution", not(feature = "std")))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(all(feature = "distribution", feature = "std"))]
#[inline]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(all(feature = "distribution", not(feature = "std")))]
#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(all(feature = "distribution", feature = "std"))]
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    x.ln_1p()
}

#[cfg(all(feature = "distribution", not(feature = "std")))]
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    libm::log1p(x)
}

#[cfg(all(feature = "distribution", feature = "std"))]
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(all(feature = "distribution", not(feature = "std")))]
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[cfg(all(feature = "distribution", feature = "std"))]
#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(feature = "distribution", not(feature = "std")))]
#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}
