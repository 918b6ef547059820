//! # rg-payoff
//!
//! Option legs and strategy payoff functions for riskgraph.
//!
//! A [`Strategy`] is an ordered list of [`OptionLeg`]s; its payoff at a given
//! underlying price is the sum of the leg payoffs, each
//! `quantity × (intrinsic value − premium)`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Single option positions (call/put, strike, premium, quantity).
pub mod leg;

/// Option type and terminal payoff functions.
pub mod payoff;

/// Ordered collections of legs.
pub mod strategy;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use leg::OptionLeg;
pub use payoff::{OptionType, Payoff, VanillaPayoff};
pub use strategy::{portfolio_payoff, Strategy};
