//! Core traits for streaming statistics
//!
//! Every accumulator implements [`Statistic`] (a pure read of the current result) and
//! [`StatisticAccumulator`] (one-at-a-time updates plus a directional merge), so that
//! generic drivers such as [`descriptive::add`](crate::descriptive::add) or a parallel
//! fold can work with any statistic without knowing its concrete type.

use core::fmt::Debug;

/// A statistic whose current result can be read as a single `f64`
pub trait Statistic {
    /// Current value of the statistic
    ///
    /// This is a pure read; it never changes the accumulator state.
    fn value(&self) -> f64;
}

/// A mutable, mergeable accumulator of `f64` values
///
/// # Merging
///
/// [`combine`](StatisticAccumulator::combine) is directional: the receiver is updated
/// in place as if it had also seen every value accepted by `other`, and `other` is
/// only read. This makes `combine` usable as the combiner step of a fork/join fold
/// where each partition is accumulated by exactly one thread:
///
/// ```
/// use stablestats::descriptive::Mean;
/// use stablestats::traits::{Statistic, StatisticAccumulator};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let merged = data
///     .chunks(2)
///     .map(Mean::of)
///     .fold(Mean::new(), |acc, part| acc.combined(&part));
/// assert!((merged.value() - 3.5).abs() < 1e-12);
/// ```
///
/// Accumulators are not internally synchronised; concurrent `accept`/`combine` on the
/// same instance must be serialised by the caller.
pub trait StatisticAccumulator: Statistic + Clone + Debug + Default {
    /// Update the state to reflect the addition of `value`
    fn accept(&mut self, value: f64);

    /// Merge `other` into this accumulator, returning the receiver for chaining
    fn combine(&mut self, other: &Self) -> &mut Self;

    /// Consuming variant of [`combine`](StatisticAccumulator::combine)
    fn combined(mut self, other: &Self) -> Self {
        self.combine(other);
        self
    }
}
