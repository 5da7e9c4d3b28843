//! Concrete finite-difference schemes
//!
//! This module contains the implementations of the [`Scheme`](crate::solver::Scheme) trait.
//!
//! # Available Schemes
//!
//! | Scheme | Recurrence | Order | Notes |
//! |--------|------------|-------|-------|
//! | [`BackwardDifference`] | `x[i] = x[i-1] / (1 - hλ)` | 1 | monotone for λ < 0, singular at hλ = 1 |
//! | [`ForwardDifference`]  | `x[i+1] = x[i] (1 + hλ)` | 1 | stable iff -2 < hλ < 0 |
//! | [`CentralDifference`]  | `x[i+1] = x[i-1] + 2hλ x[i]` | 2 | spurious alternating mode |
//!
//! Every scheme is a stateless unit struct and can be reused for any number
//! of grids.
//!
//! # Example
//!
//! ```rust
//! use fdm_rs::problem::ProblemParams;
//! use fdm_rs::solver::{scheme_for, GridSpec, SchemeKind};
//!
//! let grid = GridSpec::new(5.0, 50).build()?;
//! let params = ProblemParams::initial_value(-1.0, 1.0);
//!
//! for kind in SchemeKind::ALL {
//!     let result = scheme_for(kind).solve(&grid, &params)?;
//!     assert_eq!(result.len(), 51);
//! }
//! # Ok::<(), fdm_rs::FdmError>(())
//! ```

pub mod backward;
pub mod central;
pub mod forward;

pub use backward::{BackwardDifference, SINGULAR_TOLERANCE};
pub use central::CentralDifference;
pub use forward::ForwardDifference;

use crate::solver::{Scheme, SchemeKind};

/// The scheme implementing a given stencil
pub fn scheme_for(kind: SchemeKind) -> &'static dyn Scheme {
    match kind {
        SchemeKind::Backward => &BackwardDifference,
        SchemeKind::Central => &CentralDifference,
        SchemeKind::Forward => &ForwardDifference,
    }
}
