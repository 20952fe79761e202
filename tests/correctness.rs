//! Correctness and invariant tests for stablestats
//!
//! These tests verify merge semantics, accuracy claims and edge cases across all
//! families. They complement the unit tests in each module by focusing on
//! properties that must always hold.
//!
//! Run with: cargo test --test correctness --features full

// Require all families
#[cfg(not(all(feature = "descriptive", feature = "distribution")))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stablestats::descriptive::{
    add, FirstMoment, Kurtosis, Mean, Skewness, StandardDeviation, Sum, SumOfFourthDeviations,
    Variance,
};
use stablestats::distribution::{
    BinomialDistribution, ContinuousDistribution, ContinuousSampler, DiscreteDistribution,
    DiscreteSampler, UniformContinuousDistribution,
};
use stablestats::precision::{high_part, sqrt2xx, square_low, CompensatedSum};
use stablestats::traits::{Statistic, StatisticAccumulator};

fn random_values(seed: u64, n: usize, scale: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| (rng.random::<f64>() - 0.5) * scale).collect()
}

fn relative_eq(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tol * a.abs().max(b.abs())
}

/// Every split point of `values` merges to the single-pass result
fn check_partitions<S: StatisticAccumulator>(values: &[f64], tol: f64) {
    let direct = add(S::default(), values);
    for split in 0..=values.len() {
        let left = add(S::default(), &values[..split]);
        let right = add(S::default(), &values[split..]);
        let merged = left.combined(&right);
        assert!(
            relative_eq(merged.value(), direct.value(), tol),
            "split {}: merged {} vs direct {}",
            split,
            merged.value(),
            direct.value()
        );
    }
}

// ============================================================================
// Sum
// ============================================================================

mod sum {
    use super::*;

    #[test]
    fn cancellation_keeps_small_terms() {
        assert_eq!(Sum::of(&[1e10, 1.0, -1e10]).value(), 1.0);

        let mut sum = Sum::new();
        sum.extend([1e100, 1.0, -1e100]);
        assert_eq!(sum.value(), 1.0);
    }

    #[test]
    fn merge_identity() {
        let a = Sum::of(&[1.5, -2.25, 8.0]);
        assert_eq!(Sum::new().combined(&a), a);
        assert_eq!(a.combined(&Sum::new()).value(), a.value());
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let a = Sum::of(&random_values(1, 100, 1e6));
        let b = Sum::of(&random_values(2, 100, 1e-3));
        let c = Sum::of(&random_values(3, 100, 1e12));

        let ab = a.combined(&b).value();
        let ba = b.combined(&a).value();
        assert!(relative_eq(ab, ba, 1e-15));

        let left = a.combined(&b).combined(&c).value();
        let right = a.combined(&b.combined(&c)).value();
        assert!(relative_eq(left, right, 1e-15));
    }

    #[test]
    fn partitions_match_single_pass() {
        check_partitions::<Sum>(&random_values(4, 64, 1e8), 1e-14);
    }

    #[test]
    fn beats_naive_summation() {
        // Every unit is below half an ULP of 1e16 and lost by a plain running sum
        let mut values = vec![1e16];
        values.extend(core::iter::repeat(1.0).take(1000));
        values.push(-1e16);
        let naive: f64 = values.iter().sum();
        assert_eq!(naive, 0.0);
        assert_eq!(Sum::of(&values).value(), 1000.0);
    }

    #[test]
    fn compensated_sum_merge_matches_concatenation() {
        let values = random_values(5, 500, 1e10);
        let (a, b) = values.split_at(200);
        let mut merged: CompensatedSum = a.iter().sum();
        merged += &b.iter().sum::<CompensatedSum>();
        let direct: CompensatedSum = values.iter().sum();
        assert!(relative_eq(merged.total(), direct.total(), 1e-15));
    }
}

// ============================================================================
// Mean
// ============================================================================

mod mean {
    use super::*;

    #[test]
    fn sentinels() {
        assert!(Mean::new().value().is_nan());
        assert_eq!(Mean::of(&[7.0]).value(), 7.0);
        assert!(Mean::of(&[1.0, f64::NAN, 2.0]).value().is_nan());
        assert_eq!(Mean::of(&[f64::INFINITY, 3.0]).value(), f64::INFINITY);
        assert!(Mean::of(&[f64::INFINITY, f64::NEG_INFINITY]).value().is_nan());
    }

    #[test]
    fn no_overflow_for_finite_input() {
        let values = [f64::MAX, f64::MAX, -f64::MAX, f64::MAX];
        let m = Mean::of(&values).value();
        assert!(m.is_finite());
        assert!((m - f64::MAX / 2.0).abs() <= f64::MAX * 1e-15);

        let mut acc = Mean::new();
        acc.extend(values);
        assert!(acc.value().is_finite());
    }

    #[test]
    fn partitions_match_single_pass() {
        check_partitions::<Mean>(&random_values(6, 64, 1e6), 1e-12);
    }

    #[test]
    fn combine_counts_both_sides() {
        let mut a = Mean::of(&[1.0; 10]);
        a.combine(&Mean::of(&[4.0; 20]));
        assert_eq!(a.count(), 30);
        assert!(relative_eq(a.value(), 3.0, 1e-15));
    }

    /// Error of `m` in ULPs of the mean of `2^30 + k * 2^-20`, computed exactly
    fn ulp_error(m: f64, ks: &[u64]) -> f64 {
        let n = ks.len() as i128;
        let sum_k: i128 = ks.iter().map(|&k| k as i128).sum();
        // The mean lies in [2^30, 2^31) where one ULP is 2^-22
        let exact = n * (1i128 << 52) + 4 * sum_k;
        let scaled = (m * 4_194_304.0) as i128;
        (scaled * n - exact).abs() as f64 / n as f64
    }

    #[test]
    fn two_pass_is_more_accurate_than_one_pass() {
        // Large magnitude, small spread: 2^30 + k * 2^-20
        let ks: Vec<u64> = (0..1000u64).map(|i| (i * 62_615_533) % (1 << 23)).collect();
        let values: Vec<f64> = ks
            .iter()
            .map(|&k| 1_073_741_824.0 + k as f64 / 1_048_576.0)
            .collect();

        let two_pass = Mean::of(&values).value();
        let mut one_pass = Mean::new();
        one_pass.extend(values.iter().copied());

        let e2 = ulp_error(two_pass, &ks);
        let e1 = ulp_error(one_pass.value(), &ks);
        assert_ne!(two_pass, one_pass.value());
        assert!(e2 <= 0.5, "two-pass error {} ulp", e2);
        assert!(e2 < e1, "two-pass {} vs one-pass {}", e2, e1);
        assert!(e1 <= 16.0, "one-pass error {} ulp", e1);
    }

    #[test]
    fn first_moment_matches_mean() {
        let values = random_values(7, 50, 10.0);
        assert_eq!(FirstMoment::of(&values).first_moment(), Mean::of(&values).value());
    }
}

// ============================================================================
// sqrt(2x^2)
// ============================================================================

mod extended_precision {
    use super::*;
    use core::f64::consts::SQRT_2;

    /// Signed error of `z` against `sqrt(2x^2)` in ULPs of `z`
    ///
    /// `2x^2 - z^2` is formed exactly from the splits of `x` and `z`; dividing by `2z`
    /// gives the first-order error of the root.
    fn ulp_error(x: f64, z: f64) -> f64 {
        let hx = high_part(x);
        let xx = x * x;
        let xl = square_low(hx, x - hx, xx);
        let hz = high_part(z);
        let zz = z * z;
        let zl = square_low(hz, z - hz, zz);
        let ulp = f64::from_bits(z.to_bits() + 1) - z;
        ((2.0 * xx - zz) + (2.0 * xl - zl)) / (2.0 * z) / ulp
    }

    #[test]
    fn more_accurate_than_naive_forms() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 4000;
        let (mut ext, mut naive1, mut naive2) = (0.0, 0.0, 0.0);
        let mut max_ext: f64 = 0.0;
        for _ in 0..n {
            let x = (1.0 + rng.random::<f64>()) * 2.0f64.powi(rng.random_range(-100..=100));
            let e = ulp_error(x, sqrt2xx(x));
            max_ext = max_ext.max(e.abs());
            ext += e * e;
            let e = ulp_error(x, (2.0 * x * x).sqrt());
            naive1 += e * e;
            let e = ulp_error(x, x * SQRT_2);
            naive2 += e * e;
        }
        let rms = |s: f64| (s / n as f64).sqrt();
        assert!(max_ext <= 0.5 + 1e-6, "max error {} ulp", max_ext);
        assert!(rms(ext) < rms(naive1), "{} vs {}", rms(ext), rms(naive1));
        assert!(rms(ext) < rms(naive2), "{} vs {}", rms(ext), rms(naive2));
    }

    #[test]
    fn boundaries() {
        assert_eq!(sqrt2xx(0.0), 0.0);
        assert_eq!(sqrt2xx(f64::INFINITY), f64::INFINITY);
        assert!(sqrt2xx(f64::NAN).is_nan());
        assert_eq!(sqrt2xx(f64::MAX), f64::INFINITY);
        assert!(sqrt2xx(f64::MAX / 2.0).is_finite());
        let min = f64::from_bits(1);
        assert_eq!(sqrt2xx(3.0 * min), 3.0 * min * SQRT_2);
    }
}

// ============================================================================
// Central moments
// ============================================================================

mod moments {
    use super::*;

    fn direct_central(values: &[f64]) -> (f64, f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter().fold((0.0, 0.0, 0.0), |(a, b, c), &x| {
            let d = x - mean;
            (a + d * d, b + d * d * d, c + d * d * d * d)
        })
    }

    #[test]
    fn higher_moments_match_direct_two_pass() {
        let values = random_values(8, 200, 4.0);
        let (m2, m3, m4) = direct_central(&values);
        let m = SumOfFourthDeviations::of(&values);
        assert!(relative_eq(m.sum_of_squared_deviations(), m2, 1e-12));
        assert!((m.sum_of_cubed_deviations() - m3).abs() <= 1e-10 * m2.powf(1.5));
        assert!(relative_eq(m.value(), m4, 1e-12));

        let mut acc = SumOfFourthDeviations::new();
        for &x in &values {
            acc.accept(x);
        }
        assert!(relative_eq(acc.sum_of_squared_deviations(), m2, 1e-10));
        assert!(relative_eq(acc.value(), m4, 1e-10));
    }

    #[test]
    fn partitions_match_single_pass() {
        let values = random_values(9, 40, 100.0);
        check_partitions::<Variance>(&values, 1e-10);
        check_partitions::<StandardDeviation>(&values, 1e-10);
        check_partitions::<Kurtosis>(&values, 1e-10);
    }

    #[test]
    fn skewness_merges_with_shifted_data() {
        // Offset data exercises the mean-difference terms of the merge
        let values: Vec<f64> = random_values(10, 60, 1.0)
            .into_iter()
            .map(|x| x * x * x + 1000.0)
            .collect();
        let direct = Skewness::of(&values).value();
        let merged = Skewness::of(&values[..13]).combined(&Skewness::of(&values[13..]));
        assert!((merged.value() - direct).abs() < 1e-8);
    }

    #[test]
    fn three_way_merge_is_associative() {
        let a = Variance::of(&random_values(11, 30, 3.0));
        let b = Variance::of(&random_values(12, 50, 7.0));
        let c = Variance::of(&random_values(13, 20, 1.0));
        let left = a.combined(&b).combined(&c).value();
        let right = a.combined(&b.combined(&c)).value();
        assert!(relative_eq(left, right, 1e-12));
    }

    #[test]
    fn degenerate_counts() {
        assert!(Variance::new().value().is_nan());
        assert_eq!(Variance::of(&[1.0]).value(), 0.0);
        assert!(Skewness::of(&[1.0, 2.0]).value().is_nan());
        assert!(Kurtosis::of(&[1.0, 2.0, 3.0]).value().is_nan());
        assert_eq!(Kurtosis::of(&[2.5; 10]).value(), 0.0);
    }
}

// ============================================================================
// Distributions
// ============================================================================

mod distribution {
    use super::*;

    #[test]
    fn binomial_inverse_inverts_cumulative() {
        for &(n, p) in &[(10, 0.7), (57, 0.13), (400, 0.5), (1000, 0.999)] {
            let d = BinomialDistribution::new(n, p).unwrap();
            for &q in &[0.01, 0.2, 0.5, 0.8, 0.99] {
                let x = d.inverse_cumulative_probability(q).unwrap();
                assert!(d.cumulative_probability(x) >= q, "n={} p={} q={}", n, p, q);
                if x > d.support_lower_bound() {
                    assert!(d.cumulative_probability(x - 1) < q, "n={} p={} q={}", n, p, q);
                }
            }
        }
    }

    #[test]
    fn binomial_cumulative_and_survival_are_complementary() {
        let d = BinomialDistribution::new(300, 0.42).unwrap();
        let mut running = 0.0;
        for x in 0..=300 {
            running += d.probability(x);
            let c = d.cumulative_probability(x);
            assert!((c + d.survival_probability(x) - 1.0).abs() < 1e-12);
            assert!((c - running).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn binomial_large_trials_median() {
        for trials in (500_000..20_000_000).step_by(2_500_000) {
            let d = BinomialDistribution::new(trials, 0.5).unwrap();
            assert_eq!(d.inverse_cumulative_probability(0.5), Ok(trials / 2));
        }
    }

    #[test]
    fn uniform_inverse_inverts_cumulative() {
        let d = UniformContinuousDistribution::new(-3.0, 5.0).unwrap();
        for &q in &[0.0, 0.125, 0.5, 0.875, 1.0] {
            let x = d.inverse_cumulative_probability(q).unwrap();
            assert_eq!(d.cumulative_probability(x), q);
        }
        assert_eq!(d.mean(), 1.0);
        assert!((d.variance() - 64.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn samplers_are_reproducible() {
        let d = BinomialDistribution::new(25, 0.4).unwrap();
        let draw = |seed| {
            let mut s = d.create_sampler(StdRng::seed_from_u64(seed));
            (0..50).map(|_| s.sample()).collect::<Vec<i32>>()
        };
        assert_eq!(draw(5), draw(5));
        assert!(draw(5).iter().all(|k| (0..=25).contains(k)));

        let u = UniformContinuousDistribution::new(10.0, 11.0).unwrap();
        let mut s = u.create_sampler(StdRng::seed_from_u64(3));
        let values: Vec<f64> = (0..1000).map(|_| s.sample()).collect();
        assert!(values.iter().all(|x| (10.0..=11.0).contains(x)));
        // Sampled values feed straight into the accumulators
        assert!((Mean::of(&values).value() - 10.5).abs() < 0.05);
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn accumulators_resume_after_round_trip() {
        let values = random_values(14, 100, 10.0);
        let (a, b) = values.split_at(60);

        let mut variance = Variance::of(a);
        let json = serde_json::to_string(&variance).unwrap();
        let mut restored: Variance = serde_json::from_str(&json).unwrap();
        for &x in b {
            variance.accept(x);
            restored.accept(x);
        }
        assert_eq!(restored.value(), variance.value());

        let sum = Sum::of(&[1e16, 1.0]);
        let restored: Sum = serde_json::from_str(&serde_json::to_string(&sum).unwrap()).unwrap();
        assert_eq!(restored, sum);

        let d = BinomialDistribution::new(12, 0.25).unwrap();
        let restored: BinomialDistribution =
            serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
        assert_eq!(restored, d);
    }

    #[test]
    fn non_finite_state_does_not_survive_json() {
        // JSON writes infinities and NaN as null
        let mut mean = Mean::new();
        mean.accept(f64::INFINITY);
        let json = serde_json::to_string(&mean).unwrap();
        assert!(json.contains("null"));
        assert!(serde_json::from_str::<Mean>(&json).is_err());

        let sum = Sum::of(&[f64::NAN]);
        let json = serde_json::to_string(&sum).unwrap();
        assert!(serde_json::from_str::<Sum>(&json).is_err());

        // A finite state next to it is unaffected
        let mean = Mean::of(&[1.0, 2.0]);
        let json = serde_json::to_string(&mean).unwrap();
        assert_eq!(serde_json::from_str::<Mean>(&json).unwrap(), mean);
    }
}
