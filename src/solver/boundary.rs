//! Terminal boundary condition by rescaling
//!
//! # Design
//!
//! The boundary-value framing `x(0) = x0, x(T) = xT` is NOT solved as a
//! global linear system. Each scheme marches its initial-value recurrence
//! and the whole trajectory is multiplied by the constant
//!
//! ```text
//! factor = xT / x[N]
//! ```
//!
//! so the rescaled trajectory ends exactly at `xT`. Because the test
//! equation is linear and homogeneous, the rescaled sequence still
//! satisfies the scheme's recurrence.
//!
//! # Edge cases
//!
//! - `x[N] == 0` exactly: the factor is undefined, [`FdmError::DegenerateRescale`]
//! - `x[N]` not finite: not an error, the non-finite factor propagates and
//!   is logged
//! - already rescaled to the same `xT`: factor is exactly 1

use crate::error::{FdmError, Result};
use crate::problem::Trajectory;
use crate::solver::SchemeKind;

/// Rescaling of a marched trajectory onto a terminal value `xT`
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::Trajectory;
/// use fdm_rs::solver::{SchemeKind, TerminalRescale};
///
/// let marched = Trajectory::from_vec(vec![1.0, 0.5, 0.25]);
/// let rescale = TerminalRescale::new(0.5);
///
/// let rescaled = rescale.apply(&marched, SchemeKind::Backward)?;
/// assert_eq!(rescaled.to_vec(), vec![2.0, 1.0, 0.5]);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalRescale {
    /// Target value at `t = T`
    pub terminal: f64,
}

impl TerminalRescale {
    pub fn new(terminal: f64) -> Self {
        Self { terminal }
    }

    /// `xT / x[N]`, failing when `x[N]` is exactly zero
    ///
    /// A trajectory already ending at `xT` gets a factor of exactly 1, so
    /// `xT = 0` rescales a second time without error.
    pub fn factor(&self, trajectory: &Trajectory, scheme: SchemeKind) -> Result<f64> {
        let last = trajectory
            .last()
            .ok_or(FdmError::DegenerateRescale { scheme })?;

        if last == self.terminal {
            return Ok(1.0);
        }
        if last == 0.0 {
            return Err(FdmError::DegenerateRescale { scheme });
        }

        let factor = self.terminal / last;
        if !factor.is_finite() || !last.is_finite() {
            log::warn!(
                "{scheme}: x[N] = {last} gives rescale factor {factor}, non-finite values propagate"
            );
        }

        Ok(factor)
    }

    /// Multiply every sample by `factor`
    ///
    /// The last sample is set to `xT` whenever the marched end point was
    /// finite, so the terminal condition holds exactly and a second rescale
    /// sees a factor of 1.
    pub fn apply_factor(&self, trajectory: &Trajectory, factor: f64) -> Trajectory {
        let mut values = trajectory.scaled(factor).to_vec();

        if let (Some(last), Some(marched_last)) = (values.last_mut(), trajectory.last())
            && marched_last.is_finite()
            && factor.is_finite()
        {
            *last = self.terminal;
        }

        Trajectory::from_vec(values)
    }

    /// Compute the factor and rescale in one go
    pub fn apply(&self, trajectory: &Trajectory, scheme: SchemeKind) -> Result<Trajectory> {
        let factor = self.factor(trajectory, scheme)?;
        Ok(self.apply_factor(trajectory, factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_hits_terminal_exactly() {
        let marched = Trajectory::from_vec(vec![1.0, 0.3, 0.09, 0.027]);
        let terminal = (-5.0f64).exp();
        let rescaled = TerminalRescale::new(terminal)
            .apply(&marched, SchemeKind::Forward)
            .unwrap();

        assert_eq!(rescaled.last(), Some(terminal));
        assert_eq!(rescaled.len(), marched.len());
    }

    #[test]
    fn test_rescale_is_uniform() {
        let marched = Trajectory::from_vec(vec![2.0, 1.0, 4.0]);
        let rescaled = TerminalRescale::new(2.0)
            .apply(&marched, SchemeKind::Central)
            .unwrap();

        assert_eq!(rescaled.to_vec(), vec![1.0, 0.5, 2.0]);
    }

    #[test]
    fn test_rescale_is_idempotent() {
        let marched = Trajectory::from_vec(vec![1.0, 0.7, 0.49, 0.343]);
        let rescale = TerminalRescale::new(0.123);

        let once = rescale.apply(&marched, SchemeKind::Backward).unwrap();
        let factor = rescale.factor(&once, SchemeKind::Backward).unwrap();
        assert_eq!(factor, 1.0);

        let twice = rescale.apply(&once, SchemeKind::Backward).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_end_point_is_degenerate() {
        let marched = Trajectory::from_vec(vec![1.0, 0.0]);
        let err = TerminalRescale::new(1.0)
            .apply(&marched, SchemeKind::Forward)
            .unwrap_err();

        assert!(matches!(err, FdmError::DegenerateRescale { scheme: SchemeKind::Forward }));
    }

    #[test]
    fn test_negative_zero_end_point_is_degenerate() {
        let marched = Trajectory::from_vec(vec![1.0, -0.0]);
        assert!(TerminalRescale::new(1.0).apply(&marched, SchemeKind::Forward).is_err());
    }

    #[test]
    fn test_infinite_end_point_propagates() {
        let marched = Trajectory::from_vec(vec![1.0, f64::INFINITY]);
        let rescaled = TerminalRescale::new(1.0)
            .apply(&marched, SchemeKind::Forward)
            .unwrap();

        // factor = 1 / inf = 0, and inf * 0 = NaN
        assert_eq!(rescaled[0], 0.0);
        assert!(rescaled[1].is_nan());
    }

    #[test]
    fn test_zero_terminal_collapses_to_zero() {
        let marched = Trajectory::from_vec(vec![1.0, 0.5]);
        let rescaled = TerminalRescale::new(0.0)
            .apply(&marched, SchemeKind::Backward)
            .unwrap();
        assert!(rescaled.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_terminal_rescale_is_idempotent() {
        let marched = Trajectory::from_vec(vec![1.0, 0.5, 0.25]);
        let rescale = TerminalRescale::new(0.0);

        let once = rescale.apply(&marched, SchemeKind::Backward).unwrap();
        assert_eq!(rescale.factor(&once, SchemeKind::Backward).unwrap(), 1.0);

        let twice = rescale.apply(&once, SchemeKind::Backward).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_end_point_at_terminal_needs_no_scaling() {
        let marched = Trajectory::from_vec(vec![3.0, 2.0]);
        let rescaled = TerminalRescale::new(2.0)
            .apply(&marched, SchemeKind::Central)
            .unwrap();
        assert_eq!(rescaled, marched);
    }
}
