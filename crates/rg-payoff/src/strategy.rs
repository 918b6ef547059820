//! Ordered collections of option legs.

use crate::leg::OptionLeg;
use rg_core::{Price, Quantity, Real};

/// An ordered list of option legs making up one position.
///
/// The payoff of a strategy at a given underlying price is the sum of its
/// leg payoffs; an empty strategy pays zero everywhere. The engine places no
/// limit on the number of legs — any cap (a form UI might stop at four) is a
/// presentation policy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    legs: Vec<OptionLeg>,
}

impl Strategy {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty strategy.
    pub fn new() -> Self {
        Self { legs: Vec::new() }
    }

    /// Build from an existing list of legs.
    pub fn from_legs(legs: Vec<OptionLeg>) -> Self {
        Self { legs }
    }

    /// A single leg.
    pub fn single(leg: OptionLeg) -> Self {
        Self::from_legs(vec![leg])
    }

    /// Long straddle: a call and a put at the same strike.
    pub fn long_straddle(
        strike: Real,
        call_premium: Real,
        put_premium: Real,
        quantity: Quantity,
    ) -> Self {
        Self::from_legs(vec![
            OptionLeg::call(strike, call_premium, quantity),
            OptionLeg::put(strike, put_premium, quantity),
        ])
    }

    /// Bull call spread: long a call at the lower strike, short a call at
    /// the higher one. The short leg carries a negative quantity, so its
    /// premium is received rather than paid.
    pub fn bull_call_spread(
        lower_strike: Real,
        lower_premium: Real,
        upper_strike: Real,
        upper_premium: Real,
        quantity: Quantity,
    ) -> Self {
        Self::from_legs(vec![
            OptionLeg::call(lower_strike, lower_premium, quantity),
            OptionLeg::call(upper_strike, upper_premium, -quantity),
        ])
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether the strategy has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The legs in order.
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// Iterator over the legs.
    pub fn iter(&self) -> impl Iterator<Item = &OptionLeg> {
        self.legs.iter()
    }

    // ── Modifiers ────────────────────────────────────────────────────────

    /// Append a leg.
    pub fn push(&mut self, leg: OptionLeg) {
        self.legs.push(leg);
    }

    // ── Payoff ───────────────────────────────────────────────────────────

    /// Total payoff at the given underlying price: the sum of the leg
    /// payoffs. An empty strategy yields `0`.
    pub fn payoff(&self, price: Price) -> Real {
        self.legs.iter().map(|leg| leg.payoff(price)).sum()
    }
}

impl FromIterator<OptionLeg> for Strategy {
    fn from_iter<I: IntoIterator<Item = OptionLeg>>(iter: I) -> Self {
        Self {
            legs: iter.into_iter().collect(),
        }
    }
}

impl Extend<OptionLeg> for Strategy {
    fn extend<I: IntoIterator<Item = OptionLeg>>(&mut self, iter: I) {
        self.legs.extend(iter);
    }
}

/// Helper for the common case of summing leg payoffs without building a
/// [`Strategy`].
pub fn portfolio_payoff(legs: &[OptionLeg], price: Price) -> Real {
    legs.iter().map(|leg| leg.payoff(price)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strategy_pays_zero() {
        let s = Strategy::new();
        assert!(s.is_empty());
        assert_eq!(s.payoff(0.0), 0.0);
        assert_eq!(s.payoff(175.0), 0.0);
    }

    #[test]
    fn payoff_is_sum_of_legs() {
        let mut s = Strategy::new();
        s.push(OptionLeg::call(100.0, 10.0, 1));
        s.push(OptionLeg::put(100.0, 8.0, 1));
        let expected = OptionLeg::call(100.0, 10.0, 1).payoff(130.0)
            + OptionLeg::put(100.0, 8.0, 1).payoff(130.0);
        assert!((s.payoff(130.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn long_straddle_shape() {
        let s = Strategy::long_straddle(100.0, 10.0, 8.0, 1);
        assert_eq!(s.len(), 2);
        // At the strike both legs expire worthless: lose both premia.
        assert!((s.payoff(100.0) - (-18.0)).abs() < 1e-15);
        // Far in either direction the position profits.
        assert!(s.payoff(150.0) > 0.0);
        assert!(s.payoff(50.0) > 0.0);
    }

    #[test]
    fn bull_call_spread_caps_profit() {
        let s = Strategy::bull_call_spread(100.0, 10.0, 120.0, 4.0, 1);
        // Above the upper strike the payoff is flat at
        // (120-100) - 10 + 4 = 14.
        assert!((s.payoff(120.0) - 14.0).abs() < 1e-15);
        assert!((s.payoff(180.0) - 14.0).abs() < 1e-15);
        // Below the lower strike the loss is the net premium.
        assert!((s.payoff(80.0) - (-6.0)).abs() < 1e-15);
    }

    #[test]
    fn portfolio_payoff_matches_strategy() {
        let legs = vec![
            OptionLeg::call(100.0, 10.0, 2),
            OptionLeg::put(90.0, 5.0, 1),
        ];
        let s = Strategy::from_legs(legs.clone());
        for price in [0.0, 50.0, 95.0, 110.0, 200.0] {
            assert_eq!(portfolio_payoff(&legs, price), s.payoff(price));
        }
    }

    #[test]
    fn strategy_collects_from_iterator() {
        let s: Strategy = (0..6).map(|i| OptionLeg::call(90.0 + Real::from(i), 1.0, 1)).collect();
        // No four-leg cap in the engine.
        assert_eq!(s.len(), 6);
    }
}
