//! Single option positions.

use crate::payoff::OptionType;
use rg_core::{Price, Quantity, Real};
use std::fmt;

/// One option position: call or put, strike, premium paid per unit, and a
/// signed quantity (positive = long).
///
/// The engine imposes no domain validation: negative strikes or premia and
/// zero quantities are computed arithmetically. Business-level checks belong
/// to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
    /// Premium paid (or received, if negative) per unit.
    pub premium: Real,
    /// Number of contracts; positive = long.
    pub quantity: Quantity,
}

impl OptionLeg {
    /// Create a new leg.
    pub fn new(option_type: OptionType, strike: Real, premium: Real, quantity: Quantity) -> Self {
        Self {
            option_type,
            strike,
            premium,
            quantity,
        }
    }

    /// Convenience: a long call.
    pub fn call(strike: Real, premium: Real, quantity: Quantity) -> Self {
        Self::new(OptionType::Call, strike, premium, quantity)
    }

    /// Convenience: a long put.
    pub fn put(strike: Real, premium: Real, quantity: Quantity) -> Self {
        Self::new(OptionType::Put, strike, premium, quantity)
    }

    /// Net payoff of this leg at the given underlying price:
    /// `quantity × (intrinsic value − premium)`.
    pub fn payoff(&self, price: Price) -> Real {
        Real::from(self.quantity) * (self.option_type.intrinsic(self.strike, price) - self.premium)
    }
}

impl Default for OptionLeg {
    /// The seed position used when a new leg is added: a single long call
    /// struck at 100 with a premium of 10.
    fn default() -> Self {
        Self::call(100.0, 10.0, 1)
    }
}

impl fmt::Display for OptionLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} @ {} (premium {})",
            self.quantity, self.option_type, self.strike, self.premium
        )
    }
}
