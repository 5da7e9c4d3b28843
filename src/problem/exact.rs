//! Closed-form reference solution
//!
//! # Mathematical Background
//!
//! The test equation `x' = λx` with `x(0) = x0` has the solution
//!
//! ```text
//! x(t) = x0 · exp(λt)
//! ```
//!
//! It is the yardstick every finite-difference scheme is compared against.
//! Overflow for large `λT` produces `inf`, which is returned unchanged so the
//! caller can see it.

use super::{ProblemParams, Trajectory};

/// Exact solution of `x' = λx`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolution {
    pub lambda: f64,
    pub x0: f64,
}

impl ExactSolution {
    pub fn new(lambda: f64, x0: f64) -> Self {
        Self { lambda, x0 }
    }

    /// Reference solution for a problem (the terminal value plays no role)
    pub fn from_params(params: &ProblemParams) -> Self {
        Self::new(params.lambda, params.x0)
    }

    /// `x(t) = x0 · exp(λt)`
    pub fn value_at(&self, t: f64) -> f64 {
        self.x0 * (self.lambda * t).exp()
    }

    /// Sample the solution at each time
    pub fn evaluate(&self, times: &[f64]) -> Trajectory {
        Trajectory::from_iterator(times.iter().map(|&t| self.value_at(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_origin_is_x0() {
        let exact = ExactSolution::new(-3.0, 2.5);
        assert_eq!(exact.value_at(0.0), 2.5);
    }

    #[test]
    fn test_evaluate_decay() {
        let exact = ExactSolution::new(-1.0, 1.0);
        let times: Vec<f64> = (0..=5).map(|i| i as f64).collect();
        let x = exact.evaluate(&times);

        assert_eq!(x.len(), 6);
        for (i, value) in x.iter().enumerate() {
            assert!((value - (-(i as f64)).exp()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_zero_lambda_is_constant() {
        let exact = ExactSolution::new(0.0, 4.0);
        let x = exact.evaluate(&[0.0, 10.0, 100.0]);
        assert!(x.iter().all(|&v| v == 4.0));
    }

    #[test]
    fn test_overflow_passes_through() {
        let exact = ExactSolution::new(1000.0, 1.0);
        let x = exact.evaluate(&[0.0, 1.0]);
        assert_eq!(x[0], 1.0);
        assert!(x[1].is_infinite());
    }
}
