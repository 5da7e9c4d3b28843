//! Problem definition
//!
//! This module describes WHAT is being approximated: the linear scalar test
//! equation
//!
//! ```text
//! x'(t) = λ x(t),    x(0) = x0    [, x(T) = xT]
//! ```
//!
//! together with its closed-form reference solution and the container used
//! for every sampled solution.
//!
//! # Core Concepts
//!
//! - **[`ProblemParams`]**: λ, the initial value `x0` and an optional
//!   terminal value `xT`. Supplying `xT` turns on boundary-value rescaling
//!   in the solver.
//! - **[`ExactSolution`]**: `x(t) = x0 · exp(λt)`, evaluated on the grid.
//! - **[`Trajectory`]**: one value per grid point, indexed `0..=N`.
//!
//! # Architecture
//!
//! The problem is **separate from the numerical schemes**:
//! - the problem supplies the equation and its exact answer
//! - the [`solver`](crate::solver) supplies the discretizations
//!
//! # Example
//!
//! ```rust
//! use fdm_rs::problem::{ExactSolution, ProblemParams};
//!
//! let params = ProblemParams::initial_value(-1.0, 1.0);
//! let exact = ExactSolution::from_params(&params);
//!
//! let samples = exact.evaluate(&[0.0, 1.0, 2.0]);
//! assert_eq!(samples.len(), 3);
//! assert!((samples[1] - (-1.0f64).exp()).abs() < 1e-15);
//! ```

pub mod params;
pub mod exact;
pub mod trajectory;

pub use params::ProblemParams;
pub use exact::ExactSolution;
pub use trajectory::Trajectory;
