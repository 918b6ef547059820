//! Risk/reward summary statistics.

use crate::curve::PayoffCurve;
use rg_core::{errors::Result, Error, Real, Size};

/// Maximum profit, maximum loss, and break-even crossings derived from a
/// [`PayoffCurve`].
///
/// Break-even points are recorded as **indices** into the curve, naming the
/// sample *after* each sign change, not an interpolated price. The sign test
/// treats an exact zero as non-negative on both sides of the comparison, so
/// a zero-valued sample flanked by negative neighbours records two
/// consecutive crossings. See `break_even_prices` for the display-friendly
/// mapping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Largest payoff on the curve.
    pub max_profit: Real,
    /// Smallest payoff on the curve.
    pub max_loss: Real,
    /// Indices of the samples immediately after each zero crossing.
    pub break_even_points: Vec<Size>,
}

impl Summary {
    /// Compute the summary of a curve.
    ///
    /// Fails with [`Error::EmptyCurve`] when the curve has no samples;
    /// max/min over nothing has no meaningful value and must not leak out
    /// as an infinity or NaN.
    pub fn of(curve: &PayoffCurve) -> Result<Self> {
        let payoffs = curve.payoffs();
        if payoffs.is_empty() {
            return Err(Error::EmptyCurve);
        }

        let max_profit = payoffs.iter().copied().fold(Real::NEG_INFINITY, Real::max);
        let max_loss = payoffs.iter().copied().fold(Real::INFINITY, Real::min);

        let mut break_even_points = Vec::new();
        for i in 1..payoffs.len() {
            let (prev, curr) = (payoffs[i - 1], payoffs[i]);
            if (prev < 0.0 && curr >= 0.0) || (prev >= 0.0 && curr < 0.0) {
                break_even_points.push(i);
            }
        }

        Ok(Self {
            max_profit,
            max_loss,
            break_even_points,
        })
    }

    /// Map the break-even indices to the sampled prices of `curve` (what a
    /// display layer would print). The index list stays the primary output.
    pub fn break_even_prices(&self, curve: &PayoffCurve) -> Vec<Real> {
        self.break_even_points
            .iter()
            .map(|&i| curve.prices()[i])
            .collect()
    }
}
