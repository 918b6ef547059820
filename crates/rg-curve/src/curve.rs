//! Sampled price→payoff curves.

use crate::range::PriceRange;
use crate::summary::Summary;
use rg_core::{errors::Result, Real, Size};
use rg_payoff::{OptionLeg, Strategy};

/// A strategy payoff sampled over a price grid: parallel vectors of
/// ascending underlying prices and the total payoff at each.
///
/// A fresh curve is produced from scratch on every sampling call; nothing is
/// cached or updated incrementally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffCurve {
    prices: Vec<Real>,
    payoffs: Vec<Real>,
}

impl PayoffCurve {
    /// Sample the total payoff of `strategy` at every price in `range`.
    pub fn sample(strategy: &Strategy, range: PriceRange) -> Self {
        let mut prices = Vec::with_capacity(range.len());
        let mut payoffs = Vec::with_capacity(range.len());
        for price in range.prices() {
            prices.push(price);
            payoffs.push(strategy.payoff(price));
        }
        Self { prices, payoffs }
    }

    /// Sample a single leg over `range`; used by chart layers that plot
    /// per-leg lines alongside the combined curve.
    pub fn sample_leg(leg: &OptionLeg, range: PriceRange) -> Self {
        let mut prices = Vec::with_capacity(range.len());
        let mut payoffs = Vec::with_capacity(range.len());
        for price in range.prices() {
            prices.push(price);
            payoffs.push(leg.payoff(price));
        }
        Self { prices, payoffs }
    }

    /// Build a curve from parallel price/payoff vectors.
    ///
    /// # Panics
    /// Panics if the vectors differ in length.
    pub fn from_parts(prices: Vec<Real>, payoffs: Vec<Real>) -> Self {
        assert_eq!(
            prices.len(),
            payoffs.len(),
            "PayoffCurve: prices and payoffs must have the same length"
        );
        Self { prices, payoffs }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.prices.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// The sampled prices, in ascending order.
    pub fn prices(&self) -> &[Real] {
        &self.prices
    }

    /// The payoff at each sampled price.
    pub fn payoffs(&self) -> &[Real] {
        &self.payoffs
    }

    /// Iterator over `(price, payoff)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.prices.iter().copied().zip(self.payoffs.iter().copied())
    }

    // ── Derived statistics ───────────────────────────────────────────────

    /// Summary statistics (max profit, max loss, break-even indices).
    ///
    /// Fails with [`rg_core::Error::EmptyCurve`] when the curve has no
    /// samples.
    pub fn summarize(&self) -> Result<Summary> {
        Summary::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_yields_201_samples() {
        let strategy = Strategy::single(OptionLeg::call(100.0, 10.0, 1));
        let curve = PayoffCurve::sample(&strategy, PriceRange::default());
        assert_eq!(curve.len(), 201);
        assert_eq!(curve.prices()[0], 0.0);
        assert_eq!(curve.prices()[200], 200.0);
    }

    #[test]
    fn empty_strategy_samples_to_zero() {
        let curve = PayoffCurve::sample(&Strategy::new(), PriceRange::default());
        assert!(curve.payoffs().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn prices_ascend() {
        let strategy = Strategy::single(OptionLeg::put(80.0, 6.0, 2));
        let curve = PayoffCurve::sample(&strategy, PriceRange::default());
        assert!(curve.prices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sampling_is_deterministic() {
        let strategy = Strategy::long_straddle(100.0, 10.0, 8.0, 1);
        let a = PayoffCurve::sample(&strategy, PriceRange::default());
        let b = PayoffCurve::sample(&strategy, PriceRange::default());
        assert_eq!(a, b);
    }

    #[test]
    fn sample_leg_matches_single_leg_strategy() {
        let leg = OptionLeg::call(120.0, 7.0, 3);
        let by_leg = PayoffCurve::sample_leg(&leg, PriceRange::default());
        let by_strategy = PayoffCurve::sample(&Strategy::single(leg), PriceRange::default());
        assert_eq!(by_leg, by_strategy);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn from_parts_rejects_mismatched_lengths() {
        let _ = PayoffCurve::from_parts(vec![0.0, 1.0], vec![0.0]);
    }
}
