//! Finite-difference schemes
//!
//! This module provides the grid, the three discretizations of `x' = λx`,
//! the boundary-value rescaling, the stability diagnostics and the pipeline
//! that ties them together.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Problem** ([`ProblemParams`](crate::problem::ProblemParams)): WHAT to approximate
//!    - λ, initial value x0, optional terminal value xT
//!
//! 2. **Grid** ([`GridSpec`] → [`Grid`]): WHERE to sample
//!    - terminal time T, number of subintervals N
//!    - step size h = T / N, sample times t_i = i·h
//!
//! 3. **Scheme** ([`Scheme`] trait): HOW to approximate
//!    - backward, central, forward recurrences
//!    - optional rescaling onto xT
//!
//! 4. **Diagnostics** ([`StabilityVerdict`]): is the forward scheme stable?
//!
//! # Module Organization
//!
//! - **`grid`**: [`GridSpec`], [`Grid`]
//! - **`traits`**: [`Scheme`], [`SchemeKind`], [`SchemeResult`]
//! - **`methods`**: [`BackwardDifference`], [`CentralDifference`], [`ForwardDifference`]
//! - **`boundary`**: [`TerminalRescale`]
//! - **`stability`**: [`StabilityVerdict`]
//! - **`scenario`**: [`Scenario`], the pipeline input
//! - **`pipeline`**: [`solve_all`] and its output [`Comparison`]
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │    Scenario     │  (λ, x0, xT?, T, N)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │      Grid       │  h, t_0..t_N
//! └────────┬────────┘
//!          │
//!          ├───────────────────┬─────────────────────┐
//!          │                   │                     │
//! ┌────────▼────────┐ ┌────────▼─────────┐ ┌─────────▼─────────┐
//! │ Exact solution  │ │ Schemes (x3)     │ │ Stability verdict │
//! │ x0·exp(λt)      │ │ + rescale to xT  │ │ |1 + hλ| < 1 ?    │
//! └────────┬────────┘ └────────┬─────────┘ └─────────┬─────────┘
//!          │                   │                     │
//!          └───────────────────┼─────────────────────┘
//!                     ┌────────▼────────┐
//!                     │   Comparison    │
//!                     └─────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use fdm_rs::solver::{solve_all, Scenario, SchemeKind};
//!
//! let scenario = Scenario::boundary_value_default().with_intervals(100);
//! let comparison = solve_all(&scenario)?;
//!
//! for kind in SchemeKind::ALL {
//!     match comparison.scheme(kind) {
//!         Ok(result) => println!("{kind}: x(T) = {:?}", result.final_value()),
//!         Err(e) => eprintln!("{kind} failed: {e}"),
//!     }
//! }
//! # Ok::<(), fdm_rs::FdmError>(())
//! ```
//!
//! # Error Handling
//!
//! Common errors:
//! - Invalid grid (non-positive T, zero subintervals)
//! - Non-finite λ, x0 or xT
//! - Singular backward step (hλ = 1)
//! - Degenerate rescale (marched trajectory ends at exactly zero)
//!
//! Overflow (large λT) is not an error: `inf` and `NaN` samples are
//! returned as computed.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod grid;
mod stability;
mod pipeline;
pub mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    Scheme,
    SchemeKind,
    SchemeResult,
};

pub use boundary::TerminalRescale;
pub use grid::{Grid, GridSpec, DEFAULT_INTERVALS, DEFAULT_TOTAL_TIME, RECOMMENDED_INTERVALS};
pub use scenario::{default_terminal, Scenario};
pub use stability::StabilityVerdict;
pub use pipeline::{solve_all, Comparison};

pub use methods::{scheme_for, BackwardDifference, CentralDifference, ForwardDifference};
