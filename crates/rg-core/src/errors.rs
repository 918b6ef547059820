//! Error types for riskgraph.
//!
//! The engine accepts almost any input arithmetically; the few conditions it
//! does reject (an empty curve handed to the summariser, a degenerate
//! sampling grid) are collected in a single `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout riskgraph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Summary statistics were requested for a curve with zero samples.
    #[error("cannot summarise an empty payoff curve")]
    EmptyCurve,

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout riskgraph.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rg_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rg_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use rg_core::{fail, errors::Error};
/// fn always_err() -> rg_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
