//! Error-free transformations and extended-precision `sqrt(2x²)`
//!
//! The splitting and product routines follow Dekker (1971), "A floating-point
//! technique for extending the available precision". The two-sum is Knuth's branch
//! free variant, valid for any ordering of the operands.

use crate::math;

/// Dekker split multiplier: `2^27 + 1`
const MULTIPLIER: f64 = 134_217_729.0;

/// Inputs above this may overflow when squared: `2^500`
const BIG: f64 = f64::from_bits(0x5f30_0000_0000_0000);
/// Inputs below this may lose bits when squared: `2^-500`
const SMALL: f64 = f64::from_bits(0x20b0_0000_0000_0000);
/// `2^600`
const SCALE_UP: f64 = f64::from_bits(0x6570_0000_0000_0000);
/// `2^-600`
const SCALE_DOWN: f64 = f64::from_bits(0x1a70_0000_0000_0000);

/// Sum of `a` and `b` with the exact rounding error: `a + b = s + e`
///
/// # Example
///
/// ```
/// use stablestats::precision::two_sum;
///
/// let (s, e) = two_sum(1e16, 1.0);
/// assert_eq!(s, 1e16);
/// assert_eq!(e, 1.0);
/// ```
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, two_sum_low(a, b, s))
}

/// Rounding error of `s = fl(a + b)`
///
/// The result is only meaningful for finite `s`.
#[inline]
pub fn two_sum_low(a: f64, b: f64, s: f64) -> f64 {
    let bv = s - a;
    let av = s - bv;
    (a - av) + (b - bv)
}

/// Sum with exact error, requiring `|a| >= |b|`
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

/// High 26 bits of the significand of `value`
///
/// `value - high_part(value)` is exactly representable and fits in 26 bits, so
/// products of parts are exact. Requires `|value| < 2^995`.
#[inline]
pub fn high_part(value: f64) -> f64 {
    let c = MULTIPLIER * value;
    c - (c - value)
}

/// Low part of `x * y` given the splits of both operands and the rounded product
#[inline]
pub fn two_product_low(hx: f64, lx: f64, hy: f64, ly: f64, xy: f64) -> f64 {
    lx * ly - (((xy - hx * hy) - lx * hy) - hx * ly)
}

/// Low part of `x * x` given the split of `x` and the rounded square
#[inline]
pub fn square_low(hx: f64, lx: f64, xx: f64) -> f64 {
    lx * lx - ((xx - hx * hx) - 2.0 * lx * hx)
}

/// Compute `sqrt(2 * x * x)` to within 1 ULP
///
/// The square is carried as a double-double so neither overflow of `x * x` nor the
/// rounding of the square before the root affects the result. The argument is
/// assumed non-negative:
///
/// - `0` returns `0`, `+inf` returns `+inf`, NaN returns NaN.
/// - Values whose result exceeds `f64::MAX` return `+inf`.
/// - Sub-normal values are scaled up before the computation and handled exactly.
/// - Large negative values overflow during scaling and return NaN.
///
/// # Example
///
/// ```
/// use stablestats::precision::sqrt2xx;
///
/// assert_eq!(sqrt2xx(1.0), core::f64::consts::SQRT_2);
/// assert_eq!(sqrt2xx(f64::MAX), f64::INFINITY);
/// ```
pub fn sqrt2xx(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    if x > BIG {
        if x == f64::INFINITY {
            return x;
        }
        return compute_sqrt2aa(x * SCALE_DOWN) * SCALE_UP;
    }
    if x < SMALL {
        return compute_sqrt2aa(x * SCALE_UP) * SCALE_DOWN;
    }
    compute_sqrt2aa(x)
}

/// `sqrt(2 a²)` for `a` in `[2^-500, 2^500]` (after scaling)
fn compute_sqrt2aa(a: f64) -> f64 {
    let ha = high_part(a);
    let la = a - ha;

    // a^2 = x + xx exactly; doubling is exact
    let x = a * a;
    let xx = square_low(ha, la, x);
    let y = 2.0 * x;
    let yy = 2.0 * xx;

    // Dekker square root of the double-double (y, yy)
    let c = math::sqrt(y);
    let hc = high_part(c);
    let lc = c - hc;
    let u = c * c;
    let uu = square_low(hc, lc, u);
    let cc = (y - u - uu + yy) / (2.0 * c);
    c + cc
}
