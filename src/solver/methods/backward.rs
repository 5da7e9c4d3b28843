//! Backward difference scheme
//!
//! # Mathematical Background
//!
//! Replacing `x'(t_i)` by the backward quotient `(x[i] - x[i-1]) / h` in
//! `x' = λx` gives
//!
//! ```text
//! x[0] = x0
//! x[i] = x[i-1] / (1 - hλ)        i = 1, ..., N
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(h))
//! - **Stability**: every step shrinks the solution for `λ < 0`, whatever `h`
//! - **Monotone**: for `λ < 0` the samples keep the sign of `x0`
//!
//! # Singular step
//!
//! When `hλ = 1` the denominator vanishes. If `|1 - hλ|` is below
//! [`SINGULAR_TOLERANCE`] the scheme fails with
//! [`FdmError::SingularStep`] instead of dividing. The denominator is the
//! same at every step, so the failure is reported at step 1 and the whole
//! trajectory is withheld.

use crate::error::{FdmError, Result};
use crate::problem::{ProblemParams, Trajectory};
use crate::solver::grid::Grid;
use crate::solver::{Scheme, SchemeKind};

/// Denominators `|1 - hλ|` below this value are treated as singular
pub const SINGULAR_TOLERANCE: f64 = 1e-14;

/// Implicit-style backward-difference scheme
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::ProblemParams;
/// use fdm_rs::solver::{BackwardDifference, GridSpec, Scheme};
///
/// let grid = GridSpec::new(5.0, 5).build()?;
/// let x = BackwardDifference.march(&grid, &ProblemParams::initial_value(-1.0, 1.0))?;
///
/// assert_eq!(x[1], 0.5);
/// assert_eq!(x[5], 1.0 / 32.0);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardDifference;

impl BackwardDifference {
    pub fn new() -> Self {
        Self
    }
}

impl Scheme for BackwardDifference {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Backward
    }

    fn march(&self, grid: &Grid, params: &ProblemParams) -> Result<Trajectory> {
        let n = grid.intervals();
        let denominator = 1.0 - grid.h() * params.lambda;

        if denominator.abs() < SINGULAR_TOLERANCE {
            log::warn!(
                "{}: 1 - hλ = {denominator:e} with h = {}, λ = {}",
                self.name(),
                grid.h(),
                params.lambda
            );
            return Err(FdmError::SingularStep {
                scheme: self.kind(),
                step: 1,
                denominator,
            });
        }

        let mut x = Vec::with_capacity(n + 1);
        x.push(params.x0);

        for i in 1..=n {
            x.push(x[i - 1] / denominator);
        }

        Ok(Trajectory::from_vec(x))
    }
}
