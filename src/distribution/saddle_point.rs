//! Saddle point expansion of discrete probability masses
//!
//! Loader (2000), "Fast and Accurate Computation of Binomial Probabilities". The
//! mass is split into the error of Stirling's approximation of the factorials and a
//! deviance term, both computed without cancellation.

use crate::math;

/// `ln(2 pi)`
const LN_2_PI: f64 = 1.837_877_066_409_345_5;

/// Stirling series coefficients 1/12, 1/360, 1/1260, 1/1680, 1/1188
const S0: f64 = 1.0 / 12.0;
const S1: f64 = 1.0 / 360.0;
const S2: f64 = 1.0 / 1260.0;
const S3: f64 = 1.0 / 1680.0;
const S4: f64 = 1.0 / 1188.0;

/// `ln(z!) - ((z + 0.5) ln(z) - z + ln(sqrt(2 pi)))` for `z = 0..=15`
const STIRLING_ERRORS: [f64; 16] = [
    0.0,
    0.081_061_466_795_327_26,
    0.041_340_695_955_409_3,
    0.027_677_925_684_998_34,
    0.020_790_672_103_765_093,
    0.016_644_691_189_821_193,
    0.013_876_128_823_070_748,
    0.011_896_709_945_891_77,
    0.010_411_265_261_972_096,
    0.009_255_462_182_712_733,
    0.008_330_563_433_362_87,
    0.007_573_675_487_951_841,
    0.006_942_840_107_209_53,
    0.006_408_994_188_004_207,
    0.005_951_370_112_758_847_5,
    0.005_554_733_551_962_801,
];

/// Error of Stirling's approximation to `ln(z!)` for integer `z >= 0`
pub(crate) fn stirling_error(z: f64) -> f64 {
    if z <= 15.0 {
        return STIRLING_ERRORS[z as usize];
    }
    let z2 = z * z;
    if z > 500.0 {
        return (S0 - S1 / z2) / z;
    }
    if z > 80.0 {
        return (S0 - (S1 - S2 / z2) / z2) / z;
    }
    if z > 35.0 {
        return (S0 - (S1 - (S2 - S3 / z2) / z2) / z2) / z;
    }
    (S0 - (S1 - (S2 - (S3 - S4 / z2) / z2) / z2) / z2) / z
}

/// Deviance `x ln(x / mu) + mu - x`, accurate when `x` is close to `mu`
pub(crate) fn deviance_part(x: f64, mu: f64) -> f64 {
    if math::abs(x - mu) < 0.1 * (x + mu) {
        let d = x - mu;
        let v = d / (x + mu);
        let v2 = v * v;
        let mut s = d * v;
        let mut ej = 2.0 * x * v;
        let mut j = 1.0;
        loop {
            ej *= v2;
            let s1 = s + ej / (2.0 * j + 1.0);
            if s1 == s {
                return s1;
            }
            s = s1;
            j += 1.0;
        }
    }
    x * math::ln(x / mu) + mu - x
}

/// `ln P(X = x)` for `X ~ Binomial(n, p)` with `0 < x < n` and `0 < p < 1`
pub(crate) fn log_binomial_probability(x: i32, n: i32, p: f64, q: f64) -> f64 {
    let n = n as f64;
    let x = x as f64;
    let nx = n - x;
    let lc = stirling_error(n)
        - stirling_error(x)
        - stirling_error(nx)
        - deviance_part(x, n * p)
        - deviance_part(nx, n * q);
    let lf = LN_2_PI + math::ln(x) + math::ln_1p(-x / n);
    lc - 0.5 * lf
}
