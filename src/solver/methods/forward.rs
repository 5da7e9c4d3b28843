//! Forward difference scheme
//!
//! # Mathematical Background
//!
//! Replacing `x'(t_i)` by the forward quotient `(x[i+1] - x[i]) / h` in
//! `x' = λx` gives the explicit recurrence
//!
//! ```text
//! x[0]   = x0
//! x[i+1] = x[i] · (1 + hλ)        i = 0, ..., N-1
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(h))
//! - **Stability**: conditional, `|1 + hλ| < 1` (see [`StabilityVerdict`])
//! - **Singularities**: none
//!
//! For `λ < 0` and `h > 2/|λ|` the samples alternate in sign with growing
//! magnitude. That is the instability the diagnostics report.
//!
//! [`StabilityVerdict`]: crate::solver::StabilityVerdict

use crate::error::Result;
use crate::problem::{ProblemParams, Trajectory};
use crate::solver::grid::Grid;
use crate::solver::{Scheme, SchemeKind};

/// Explicit forward-difference scheme
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::ProblemParams;
/// use fdm_rs::solver::{ForwardDifference, GridSpec, Scheme};
///
/// let grid = GridSpec::new(5.0, 5).build()?;
/// let x = ForwardDifference.march(&grid, &ProblemParams::initial_value(-1.0, 1.0))?;
///
/// // 1 + hλ = 0: everything after the seed vanishes
/// assert_eq!(x.to_vec(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardDifference;

impl ForwardDifference {
    pub fn new() -> Self {
        Self
    }
}

impl Scheme for ForwardDifference {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Forward
    }

    fn march(&self, grid: &Grid, params: &ProblemParams) -> Result<Trajectory> {
        let n = grid.intervals();
        let growth = 1.0 + grid.h() * params.lambda;

        let mut x = Vec::with_capacity(n + 1);
        x.push(params.x0);

        for i in 0..n {
            x.push(x[i] * growth);
        }

        Ok(Trajectory::from_vec(x))
    }
}
