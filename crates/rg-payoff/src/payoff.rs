//! Option type and terminal payoff functions.
//!
//! Payoffs describe the value of an option at expiry as a function of the
//! underlying asset price, before any premium is accounted for.

use rg_core::{Price, Real};
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at `price` for an option of this type struck at
    /// `strike`: `max(0, price − strike)` for calls, `max(0, strike − price)`
    /// for puts.
    ///
    /// Any real inputs are accepted and computed arithmetically; rejecting
    /// nonsensical values (negative strikes, say) is the caller's concern.
    pub fn intrinsic(self, strike: Real, price: Price) -> Real {
        (self.sign() * (price - strike)).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Base trait for terminal option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at expiry.
    fn value(&self, price: Price) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// Plain vanilla option payoff.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone)]
pub struct VanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl VanillaPayoff {
    /// Create a new vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for VanillaPayoff {
    fn value(&self, price: Price) -> Real {
        self.option_type.intrinsic(self.strike, price)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_intrinsic() {
        assert!((OptionType::Call.intrinsic(100.0, 110.0) - 10.0).abs() < 1e-15);
        assert!((OptionType::Call.intrinsic(100.0, 90.0) - 0.0).abs() < 1e-15);
        assert!((OptionType::Call.intrinsic(100.0, 100.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn put_intrinsic() {
        assert!((OptionType::Put.intrinsic(100.0, 90.0) - 10.0).abs() < 1e-15);
        assert!((OptionType::Put.intrinsic(100.0, 110.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn negative_strike_is_computed_arithmetically() {
        // No domain validation in the engine.
        assert!((OptionType::Call.intrinsic(-50.0, 10.0) - 60.0).abs() < 1e-15);
    }

    #[test]
    fn vanilla_payoff_value() {
        let p = VanillaPayoff::new(OptionType::Call, 100.0);
        assert!((p.value(110.0) - 10.0).abs() < 1e-15);
        assert!((p.value(90.0) - 0.0).abs() < 1e-15);
        assert_eq!(p.description(), "Vanilla Call @ 100");
    }
}
