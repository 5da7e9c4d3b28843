//! Scalar inputs of the test equation

use crate::error::{FdmError, Result};

/// Default decay rate λ
pub const DEFAULT_LAMBDA: f64 = -1.0;

/// Default initial value x(0)
pub const DEFAULT_X0: f64 = 1.0;

/// Parameters of `x' = λx` with an initial value and an optional terminal value
///
/// # Boundary values
///
/// `terminal = None` is the initial-value framing: each scheme marches from
/// `x0` and its trajectory is reported as is.
///
/// `terminal = Some(xT)` is the boundary-value framing: each marched
/// trajectory is rescaled by `xT / x[N]` so that it ends exactly at `xT`.
/// No global system is solved.
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::ProblemParams;
///
/// let ivp = ProblemParams::initial_value(-2.0, 1.0);
/// assert!(!ivp.is_boundary_value());
///
/// let bvp = ivp.with_terminal((-10.0f64).exp());
/// assert!(bvp.is_boundary_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemParams {
    /// Rate λ in `x' = λx` (any sign)
    pub lambda: f64,

    /// Value at `t = 0`
    pub x0: f64,

    /// Optional value at `t = T`
    pub terminal: Option<f64>,
}

impl Default for ProblemParams {
    fn default() -> Self {
        Self::initial_value(DEFAULT_LAMBDA, DEFAULT_X0)
    }
}

impl ProblemParams {
    /// Initial-value problem: no terminal rescaling
    pub fn initial_value(lambda: f64, x0: f64) -> Self {
        Self { lambda, x0, terminal: None }
    }

    /// Boundary-value problem: trajectories are rescaled to end at `terminal`
    pub fn boundary_value(lambda: f64, x0: f64, terminal: f64) -> Self {
        Self { lambda, x0, terminal: Some(terminal) }
    }

    /// Builder pattern: set λ
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Builder pattern: set x0
    pub fn with_x0(mut self, x0: f64) -> Self {
        self.x0 = x0;
        self
    }

    /// Builder pattern: enable terminal rescaling
    pub fn with_terminal(mut self, terminal: f64) -> Self {
        self.terminal = Some(terminal);
        self
    }

    /// Builder pattern: disable terminal rescaling
    pub fn without_terminal(mut self) -> Self {
        self.terminal = None;
        self
    }

    /// Whether schemes are rescaled to a terminal value
    pub fn is_boundary_value(&self) -> bool {
        self.terminal.is_some()
    }

    /// Reject NaN and infinite inputs
    pub fn validate(&self) -> Result<()> {
        check_finite("lambda", self.lambda)?;
        check_finite("x0", self.x0)?;
        if let Some(terminal) = self.terminal {
            check_finite("xT", terminal)?;
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FdmError::InvalidParameter { name, value })
    }
}
