//! Comparison scenario definition
//!
//! A scenario combines the problem parameters with the grid description.
//! It is the single explicit input of the pipeline: everything the
//! interactive tool read from its sidebar lives here.

use crate::error::Result;
use crate::problem::ProblemParams;
use crate::solver::grid::GridSpec;

/// Default terminal value for the boundary-value presets, `e^{-5}`
pub fn default_terminal() -> f64 {
    (-5.0f64).exp()
}

/// Problem plus grid
///
/// # Presets
///
/// - [`Scenario::initial_value_default`]: λ = -1, T = 5, x0 = 1, N = 50
/// - [`Scenario::boundary_value_default`]: same, plus `xT = e^{-5}`
///
/// # Example
///
/// ```rust
/// use fdm_rs::solver::Scenario;
///
/// let scenario = Scenario::boundary_value_default()
///     .with_lambda(-2.0)
///     .with_intervals(100);
///
/// assert!(scenario.params.is_boundary_value());
/// assert_eq!(scenario.grid.intervals, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scenario {
    /// λ, x0 and optional xT
    pub params: ProblemParams,

    /// T and N
    pub grid: GridSpec,
}

impl Scenario {
    pub fn new(params: ProblemParams, grid: GridSpec) -> Self {
        Self { params, grid }
    }

    /// λ = -1, T = 5, x0 = 1, N = 50, no terminal value
    pub fn initial_value_default() -> Self {
        Self::default()
    }

    /// λ = -1, T = 5, x0 = 1, xT = e^{-5}, N = 50
    pub fn boundary_value_default() -> Self {
        Self::default().with_terminal(default_terminal())
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.params.lambda = lambda;
        self
    }

    pub fn with_x0(mut self, x0: f64) -> Self {
        self.params.x0 = x0;
        self
    }

    pub fn with_terminal(mut self, terminal: f64) -> Self {
        self.params.terminal = Some(terminal);
        self
    }

    pub fn without_terminal(mut self) -> Self {
        self.params.terminal = None;
        self
    }

    pub fn with_total_time(mut self, total_time: f64) -> Self {
        self.grid.total_time = total_time;
        self
    }

    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.grid.intervals = intervals;
        self
    }

    /// Step size h = T / N (not validated)
    pub fn step_size(&self) -> f64 {
        self.grid.total_time / self.grid.intervals as f64
    }

    /// Validate grid and parameters
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.params.validate()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FdmError;

    #[test]
    fn test_initial_value_default() {
        let scenario = Scenario::initial_value_default();
        assert_eq!(scenario.params.lambda, -1.0);
        assert_eq!(scenario.params.x0, 1.0);
        assert_eq!(scenario.params.terminal, None);
        assert_eq!(scenario.grid.total_time, 5.0);
        assert_eq!(scenario.grid.intervals, 50);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_boundary_value_default() {
        let scenario = Scenario::boundary_value_default();
        assert_eq!(scenario.params.terminal, Some((-5.0f64).exp()));
    }

    #[test]
    fn test_builders() {
        let scenario = Scenario::default()
            .with_lambda(-3.0)
            .with_x0(2.0)
            .with_total_time(5.0)
            .with_intervals(5);
        assert_eq!(scenario.step_size(), 1.0);
        assert_eq!(scenario.params.x0, 2.0);
        assert!(scenario.with_terminal(1.0).without_terminal().params.terminal.is_none());
    }

    #[test]
    fn test_validate_grid_first() {
        let scenario = Scenario::default().with_intervals(0).with_lambda(f64::NAN);
        assert!(matches!(scenario.validate(), Err(FdmError::InvalidGrid { .. })));

        let scenario = Scenario::default().with_lambda(f64::NAN);
        assert!(matches!(scenario.validate(), Err(FdmError::InvalidParameter { .. })));
    }
}
