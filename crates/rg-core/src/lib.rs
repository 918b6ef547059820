//! # rg-core
//!
//! Core types, aliases, and error definitions for riskgraph.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – primitive type aliases, the error
//! enum, and the `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for general-purpose counting.
pub type Integer = i32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// An underlying price or monetary value.
pub type Price = Real;

/// A signed number of contracts (positive = long).
pub type Quantity = Integer;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
