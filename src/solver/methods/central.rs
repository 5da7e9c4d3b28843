//! Central difference scheme
//!
//! # Mathematical Background
//!
//! Replacing `x'(t_i)` by the symmetric quotient `(x[i+1] - x[i-1]) / 2h`
//! gives the two-step (leapfrog) recurrence
//!
//! ```text
//! x[0]   = x0
//! x[1]   = x0 · exp(λh)                      (seeded from the exact solution)
//! x[i+1] = x[i-1] + 2hλ · x[i]               i = 1, ..., N-1
//! ```
//!
//! A single initial condition cannot determine `x[1]`, hence the exact seed.
//!
//! # Spurious mode
//!
//! The characteristic equation `r² - 2hλ r - 1 = 0` has two roots:
//!
//! ```text
//! r₁ = hλ + sqrt(1 + h²λ²)  ≈  1 + hλ      (physical mode)
//! r₂ = hλ - sqrt(1 + h²λ²)  ≈ -(1 - hλ)    (parasitic mode)
//! ```
//!
//! For `λ < 0`, `|r₂| > 1`. Any seed error excites the parasitic mode,
//! which alternates in sign and grows. The recurrence is evaluated exactly
//! as written so that this behaviour is visible; it is not filtered.
//!
//! # Characteristics
//!
//! - **Order**: second-order consistent
//! - **Stability**: weakly unstable for `λ < 0` on long horizons
//! - **Cost**: one multiply-add per step

use crate::error::Result;
use crate::problem::{ProblemParams, Trajectory};
use crate::solver::grid::Grid;
use crate::solver::{Scheme, SchemeKind};

/// Two-step central-difference scheme
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::ProblemParams;
/// use fdm_rs::solver::{CentralDifference, GridSpec, Scheme};
///
/// let grid = GridSpec::new(5.0, 5).build()?;
/// let x = CentralDifference.march(&grid, &ProblemParams::initial_value(-1.0, 1.0))?;
///
/// let e1 = (-1.0f64).exp();
/// assert_eq!(x[1], e1);
/// assert!((x[2] - (1.0 - 2.0 * e1)).abs() < 1e-15);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralDifference;

impl CentralDifference {
    pub fn new() -> Self {
        Self
    }
}

impl Scheme for CentralDifference {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Central
    }

    fn march(&self, grid: &Grid, params: &ProblemParams) -> Result<Trajectory> {
        let n = grid.intervals();
        let h = grid.h();
        let two_h_lambda = 2.0 * h * params.lambda;

        let mut x = Vec::with_capacity(n + 1);
        x.push(params.x0);
        x.push(params.x0 * (params.lambda * h).exp());

        for i in 1..n {
            x.push(x[i - 1] + two_h_lambda * x[i]);
        }

        Ok(Trajectory::from_vec(x))
    }
}
