//! # riskgraph
//!
//! Option-strategy payoff curves and risk/reward summaries.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rg-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! riskgraph = "0.1"
//! ```
//!
//! ```rust
//! use riskgraph::{OptionLeg, PayoffCurve, PriceRange, Strategy};
//!
//! let strategy = Strategy::single(OptionLeg::call(100.0, 10.0, 1));
//! let curve = PayoffCurve::sample(&strategy, PriceRange::default());
//! let summary = curve.summarize()?;
//!
//! assert_eq!(summary.max_loss, -10.0);
//! assert_eq!(summary.max_profit, 90.0);
//! assert_eq!(summary.break_even_prices(&curve), vec![110.0]);
//! # Ok::<(), riskgraph::core::Error>(())
//! ```
//!
//! A presentation layer (form + chart) owns the leg list and re-invokes the
//! engine after every edit; each call recomputes curve and summary from
//! scratch — nothing is cached and no notification mechanism is exposed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use rg_core as core;

/// Option legs and strategy payoff functions.
pub use rg_payoff as payoff;

/// Curve sampling and summary statistics.
pub use rg_curve as curve;

// ── Flat re-exports of the main types ────────────────────────────────────────

pub use rg_core::{Error, Integer, Price, Quantity, Real, Result, Size};
pub use rg_curve::{PayoffCurve, PriceRange, Summary};
pub use rg_payoff::{portfolio_payoff, OptionLeg, OptionType, Strategy};
