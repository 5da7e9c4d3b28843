//! Forward-scheme stability diagnostics
//!
//! For `x' = λx` the forward recurrence multiplies every sample by
//! `1 + hλ`. Its magnitude decides whether errors shrink or grow:
//!
//! ```text
//! |1 + hλ| < 1   decaying (stable)
//! |1 + hλ| = 1   neutral
//! |1 + hλ| > 1   growing (unstable)
//! ```
//!
//! A negative `1 + hλ` additionally flips the sign every step. The verdict
//! is informational and never alters a computed trajectory.

use std::fmt;

use crate::solver::grid::Grid;

/// Amplification factor and stability flag of the forward scheme
///
/// # Example
///
/// ```rust
/// use fdm_rs::solver::StabilityVerdict;
///
/// // λ = -3, h = 1: |1 - 3| = 2
/// let verdict = StabilityVerdict::forward(1.0, -3.0);
/// assert_eq!(verdict.amplification_factor, 2.0);
/// assert!(!verdict.is_stable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityVerdict {
    /// `|1 + hλ|`
    pub amplification_factor: f64,

    /// `amplification_factor < 1`
    pub is_stable: bool,

    /// Signed growth factor `1 + hλ`
    pub growth: f64,
}

impl StabilityVerdict {
    /// Verdict for step `h` and rate `lambda`
    pub fn forward(h: f64, lambda: f64) -> Self {
        let growth = 1.0 + h * lambda;
        let amplification_factor = growth.abs();
        Self {
            amplification_factor,
            is_stable: amplification_factor < 1.0,
            growth,
        }
    }

    pub fn from_grid(grid: &Grid, lambda: f64) -> Self {
        Self::forward(grid.h(), lambda)
    }

    /// Whether consecutive forward samples alternate in sign
    pub fn is_oscillatory(&self) -> bool {
        self.growth < 0.0
    }

    /// One-line description suitable for annotating output
    pub fn commentary(&self) -> String {
        let factor = self.amplification_factor;
        if self.is_stable {
            if self.is_oscillatory() {
                format!("forward scheme stable (|1 + hλ| = {factor:.4} < 1) but oscillating in sign")
            } else {
                format!("forward scheme stable (|1 + hλ| = {factor:.4} < 1)")
            }
        } else if factor == 1.0 {
            "forward scheme neutrally stable (|1 + hλ| = 1), errors neither grow nor decay".to_string()
        } else if self.is_oscillatory() {
            format!("forward scheme UNSTABLE (|1 + hλ| = {factor:.4} > 1), growing oscillations")
        } else {
            format!("forward scheme UNSTABLE (|1 + hλ| = {factor:.4} > 1), values grow every step")
        }
    }
}

impl fmt::Display for StabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commentary())
    }
}
