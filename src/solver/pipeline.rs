//! Full comparison pipeline
//!
//! ```text
//! Scenario ──► Grid ──┬──► exact solution ─────────────┐
//!                     ├──► backward / central / forward ├──► Comparison
//!                     └──► stability verdict ───────────┘
//! ```
//!
//! The pipeline is a pure function of the [`Scenario`]: no state survives
//! between calls, and calling it twice with the same input gives bit-identical
//! output.
//!
//! Grid and parameter errors abort the run. A failing scheme does not: its
//! error is stored in the [`Comparison`] next to the schemes that succeeded.

use crate::error::{FdmError, Result};
use crate::problem::{ExactSolution, ProblemParams, Trajectory};
use crate::solver::grid::Grid;
use crate::solver::methods::scheme_for;
use crate::solver::stability::StabilityVerdict;
use crate::solver::{Scenario, SchemeKind, SchemeResult};

/// Everything one run produces
#[derive(Debug)]
pub struct Comparison {
    /// Inputs the run was computed from
    pub params: ProblemParams,

    /// Step size and sample times
    pub grid: Grid,

    /// `x0 · exp(λ t_i)`
    pub exact: Trajectory,

    pub backward: Result<SchemeResult>,
    pub central: Result<SchemeResult>,
    pub forward: Result<SchemeResult>,

    /// Forward-scheme amplification diagnostics
    pub stability: StabilityVerdict,
}

impl Comparison {
    /// Step size h
    pub fn h(&self) -> f64 {
        self.grid.h()
    }

    /// Sample times t_0..t_N
    pub fn times(&self) -> &[f64] {
        self.grid.times()
    }

    /// Outcome of one scheme
    pub fn scheme(&self, kind: SchemeKind) -> &Result<SchemeResult> {
        match kind {
            SchemeKind::Backward => &self.backward,
            SchemeKind::Central => &self.central,
            SchemeKind::Forward => &self.forward,
        }
    }

    /// Trajectory of one scheme, `None` if it failed
    pub fn trajectory(&self, kind: SchemeKind) -> Option<&Trajectory> {
        self.scheme(kind).as_ref().ok().map(|r| &r.trajectory)
    }

    /// Schemes that failed, in display order
    pub fn failures(&self) -> Vec<(SchemeKind, &FdmError)> {
        SchemeKind::ALL
            .iter()
            .filter_map(|&kind| self.scheme(kind).as_ref().err().map(|e| (kind, e)))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        SchemeKind::ALL.iter().all(|&kind| self.scheme(kind).is_ok())
    }
}

/// Run the exact evaluator, all three schemes and the stability diagnostics
///
/// # Errors
///
/// [`FdmError::InvalidGrid`] or [`FdmError::InvalidParameter`] before any
/// recurrence runs. Scheme failures are reported inside the result.
///
/// # Example
///
/// ```rust
/// use fdm_rs::solver::{solve_all, Scenario, SchemeKind};
///
/// let scenario = Scenario::default().with_intervals(5);
/// let comparison = solve_all(&scenario)?;
///
/// assert_eq!(comparison.h(), 1.0);
/// assert!(comparison.stability.is_stable);
/// assert_eq!(comparison.trajectory(SchemeKind::Backward).unwrap()[1], 0.5);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
pub fn solve_all(scenario: &Scenario) -> Result<Comparison> {
    scenario.validate()?;
    let grid = scenario.grid.build()?;
    let params = scenario.params;

    log::debug!(
        "solving λ = {}, x0 = {}, xT = {:?} on T = {}, N = {}",
        params.lambda,
        params.x0,
        params.terminal,
        grid.total_time(),
        grid.intervals()
    );

    let exact = ExactSolution::from_params(&params).evaluate(grid.times());
    if let Some(index) = exact.first_non_finite() {
        log::warn!("exact solution overflows at t = {}", grid.times()[index]);
    }

    let solve = |kind: SchemeKind| {
        let outcome = scheme_for(kind).solve(&grid, &params);
        if let Err(e) = &outcome {
            log::warn!("{kind} failed: {e}");
        }
        outcome
    };

    let backward = solve(SchemeKind::Backward);
    let central = solve(SchemeKind::Central);
    let forward = solve(SchemeKind::Forward);

    let stability = StabilityVerdict::from_grid(&grid, params.lambda);
    if !stability.is_stable {
        log::warn!("{}", stability.commentary());
    }

    Ok(Comparison {
        params,
        grid,
        exact,
        backward,
        central,
        forward,
        stability,
    })
}
