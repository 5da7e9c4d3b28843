//! Finite-difference scheme traits and types
//!
//! # Design Philosophy
//!
//! - Central enum [`SchemeKind`] names the discretization
//! - [`Scheme`] is the single seam every discretization implements
//! - [`SchemeResult`] carries the trajectory plus string metadata for
//!   diagnostics and export
//!
//! A scheme only knows how to *march* its recurrence from `x0`. The
//! boundary-value rescaling and the metadata are added by the provided
//! [`Scheme::solve`] so every scheme handles them identically.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::problem::{ProblemParams, Trajectory};
use crate::solver::boundary::TerminalRescale;
use crate::solver::grid::Grid;

// =================================================================================================
// Scheme kind
// =================================================================================================

/// The three finite-difference stencils for `x' = λx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Difference quotient behind the evaluation point (implicit-style)
    Backward,

    /// Symmetric difference quotient (two-step)
    Central,

    /// Difference quotient ahead of the evaluation point (explicit)
    Forward,
}

impl SchemeKind {
    /// All schemes, in display order (backward, central, forward)
    pub const ALL: [SchemeKind; 3] = [SchemeKind::Backward, SchemeKind::Central, SchemeKind::Forward];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::Backward => "Backward difference",
            SchemeKind::Central => "Central difference",
            SchemeKind::Forward => "Forward difference",
        }
    }

    /// Short lowercase identifier (column headers, metadata)
    pub fn label(&self) -> &'static str {
        match self {
            SchemeKind::Backward => "backward",
            SchemeKind::Central => "central",
            SchemeKind::Forward => "forward",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =================================================================================================
// Scheme result
// =================================================================================================

/// Output of one scheme on one grid
#[derive(Debug, Clone)]
pub struct SchemeResult {
    /// Which scheme produced the trajectory
    pub kind: SchemeKind,

    /// Approximation at every grid point (after rescaling, if any)
    pub trajectory: Trajectory,

    /// Free-form diagnostics ("scheme", "h", "N", "rescaled", ...)
    pub metadata: HashMap<String, String>,
}

impl SchemeResult {
    pub fn new(kind: SchemeKind, trajectory: Trajectory) -> Self {
        Self {
            kind,
            trajectory,
            metadata: HashMap::new(),
        }
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Value at `t = T`
    pub fn final_value(&self) -> Option<f64> {
        self.trajectory.last()
    }
}

// =================================================================================================
// Scheme trait
// =================================================================================================

/// A finite-difference discretization of `x' = λx`
///
/// # Implementing a scheme
///
/// Only [`kind`](Scheme::kind) and [`march`](Scheme::march) are required:
///
/// ```rust
/// use fdm_rs::problem::{ProblemParams, Trajectory};
/// use fdm_rs::solver::{Grid, Scheme, SchemeKind};
/// use fdm_rs::Result;
///
/// /// Ignores the equation and holds x0 constant
/// struct Frozen;
///
/// impl Scheme for Frozen {
///     fn kind(&self) -> SchemeKind { SchemeKind::Forward }
///
///     fn march(&self, grid: &Grid, params: &ProblemParams) -> Result<Trajectory> {
///         Ok(Trajectory::from_vec(vec![params.x0; grid.points()]))
///     }
/// }
/// ```
///
/// # Contract
///
/// `march` returns exactly `grid.points()` samples with `x[0] == x0`, and
/// must be deterministic: the recurrence runs strictly in index order.
pub trait Scheme {
    /// Which stencil this is
    fn kind(&self) -> SchemeKind;

    /// Display name
    fn name(&self) -> &str {
        self.kind().name()
    }

    /// Run the recurrence from `x0` over the whole grid
    fn march(&self, grid: &Grid, params: &ProblemParams) -> Result<Trajectory>;

    /// March, then rescale to `params.terminal` when present
    fn solve(&self, grid: &Grid, params: &ProblemParams) -> Result<SchemeResult> {
        let marched = self.march(grid, params)?;

        let (trajectory, factor) = match params.terminal {
            Some(terminal) => {
                let rescale = TerminalRescale::new(terminal);
                let factor = rescale.factor(&marched, self.kind())?;
                (rescale.apply_factor(&marched, factor), Some(factor))
            }
            None => (marched, None),
        };

        let mut result = SchemeResult::new(self.kind(), trajectory);
        result.add_metadata("scheme", self.name());
        result.add_metadata("N", &grid.intervals().to_string());
        result.add_metadata("h", &grid.h().to_string());
        result.add_metadata("rescaled", &factor.is_some().to_string());
        if let Some(factor) = factor {
            result.add_metadata("rescale factor", &factor.to_string());
        }

        Ok(result)
    }
}
