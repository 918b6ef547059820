//! # rg-curve
//!
//! Payoff curve sampling and risk/reward summaries for riskgraph.
//!
//! A [`PriceRange`] describes an ascending grid of underlying prices; a
//! [`PayoffCurve`] holds the strategy payoff sampled over that grid; a
//! [`Summary`] reports the maximum profit, maximum loss, and break-even
//! crossing indices derived from a curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Sampled price→payoff curves.
pub mod curve;

/// Price sampling grids.
pub mod range;

/// Risk/reward summary statistics.
pub mod summary;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use curve::PayoffCurve;
pub use range::PriceRange;
pub use summary::Summary;
