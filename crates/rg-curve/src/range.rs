//! Price sampling grids.

use rg_core::{ensure, errors::Result, Integer, Real, Size};

/// An ascending grid of underlying prices: `start`, `start + step`, … up to
/// and including `end` (when the step divides the span exactly).
///
/// The default grid samples prices 0 to 200 inclusive in steps of 1
/// (201 samples), which covers the usual strike neighbourhood for a
/// risk/reward chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    start: Integer,
    end: Integer,
    step: Integer,
}

impl PriceRange {
    /// Create a grid from `start` to `end` (inclusive) with the given step.
    ///
    /// The step must be positive; `end < start` is accepted and yields an
    /// empty grid.
    pub fn new(start: Integer, end: Integer, step: Integer) -> Result<Self> {
        ensure!(step > 0, "price grid step must be positive, got {step}");
        Ok(Self { start, end, step })
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// First sampled price.
    pub fn start(&self) -> Integer {
        self.start
    }

    /// Upper bound of the grid (inclusive; sampled only if `step` divides
    /// `end − start`).
    pub fn end(&self) -> Integer {
        self.end
    }

    /// Distance between consecutive samples.
    pub fn step(&self) -> Integer {
        self.step
    }

    /// Number of samples in the grid.
    pub fn len(&self) -> Size {
        if self.end < self.start {
            0
        } else {
            ((self.end - self.start) / self.step + 1) as Size
        }
    }

    /// Whether the grid contains no samples.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterator over the sampled prices, in ascending order.
    pub fn prices(&self) -> impl Iterator<Item = Real> + '_ {
        let (start, step) = (self.start, self.step);
        (0..self.len()).map(move |i| Real::from(start) + Real::from(step) * i as Real)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            start: 0,
            end: 200,
            step: 1,
        }
    }
}
