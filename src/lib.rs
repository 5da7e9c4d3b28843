//! fdm-rs: Finite-Difference Schemes for the Linear Test Equation
//!
//! Approximates `x'(t) = λx(t)` with backward, central and forward
//! finite differences and compares each against the exact solution
//! `x0 · exp(λt)` on a uniform grid.
//!
//! # Architecture
//!
//! fdm-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Numerics**
//!    - The problem defines the equation and its exact answer (what to approximate)
//!    - The schemes provide the recurrences (how to approximate)
//!
//! 2. **Pure, repeatable runs**
//!    - One explicit input ([`Scenario`](solver::Scenario))
//!    - One output ([`Comparison`](solver::Comparison)), no retained state
//!    - Identical inputs give bit-identical outputs
//!
//! # Quick Start
//!
//! ```rust
//! use fdm_rs::prelude::*;
//!
//! # fn main() -> fdm_rs::Result<()> {
//! // 1. Describe the problem: λ = -1, T = 5, x0 = 1, N = 5
//! let scenario = Scenario::initial_value_default().with_intervals(5);
//!
//! // 2. Run the pipeline
//! let comparison = solve_all(&scenario)?;
//!
//! // 3. Inspect the results
//! assert_eq!(comparison.h(), 1.0);
//! assert_eq!(comparison.trajectory(SchemeKind::Backward).unwrap()[1], 0.5);
//! assert_eq!(comparison.trajectory(SchemeKind::Forward).unwrap()[1], 0.0);
//! assert!(comparison.stability.is_stable);
//!
//! println!("{}", render_summary(&comparison));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`problem`]: Parameters, exact solution, trajectories
//! - [`solver`]: Grid, schemes, rescaling, stability, pipeline
//! - [`output`]: Summary text, plots and CSV export
//! - [`error`]: The crate error type

// Core modules
pub mod error;
pub mod problem;
pub mod solver;

pub mod output;

pub use error::{FdmError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use fdm_rs::prelude::*;
    //! ```
    pub use crate::error::{FdmError, Result};
    pub use crate::problem::{ExactSolution,
                             ProblemParams,
                             Trajectory};
    pub use crate::solver::{solve_all,
                            Comparison,
                            GridSpec,
                            Scenario,
                            Scheme,
                            SchemeKind,
                            SchemeResult,
                            StabilityVerdict,
                            BackwardDifference,
                            CentralDifference,
                            ForwardDifference};
    pub use crate::output::render_summary;
}
