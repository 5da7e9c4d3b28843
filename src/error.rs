//! Error types
//!
//! Every failure the pipeline can report is a variant of [`FdmError`].
//! Grid and parameter errors abort a run; scheme errors are stored next to
//! the successful schemes in a [`Comparison`](crate::solver::Comparison) so
//! the caller can still render the others.

use thiserror::Error;

use crate::solver::SchemeKind;

/// Errors raised while building grids, marching schemes, or writing output
#[derive(Error, Debug)]
pub enum FdmError {
    /// `T <= 0`, `T` not finite, or `N == 0`
    #[error("Invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// A scalar input is NaN or infinite
    #[error("Invalid parameter {name}: {value} is not finite")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The backward denominator `1 - hλ` vanished
    #[error("{scheme} is singular at step {step}: denominator 1 - hλ = {denominator:e}")]
    SingularStep {
        scheme: SchemeKind,
        step: usize,
        denominator: f64,
    },

    /// Terminal rescaling requested but the marched trajectory ends at zero
    #[error("{scheme} cannot be rescaled to the terminal value: x[N] is exactly zero")]
    DegenerateRescale { scheme: SchemeKind },

    /// Export failure (file creation, writing)
    #[error("Export error: {0}")]
    Export(#[from] std::io::Error),

    /// Export request rejected before touching the file system
    #[error("Export error: {message}")]
    InvalidExport { message: String },

    /// Plot rendering failure
    #[error("Plot error: {message}")]
    Plot { message: String },
}

impl FdmError {
    /// Shorthand for [`FdmError::InvalidGrid`]
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid { reason: reason.into() }
    }

    /// Scheme that raised this error, if any
    pub fn scheme(&self) -> Option<SchemeKind> {
        match self {
            Self::SingularStep { scheme, .. } | Self::DegenerateRescale { scheme } => Some(*scheme),
            _ => None,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, FdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_step_message_names_scheme_and_step() {
        let err = FdmError::SingularStep {
            scheme: SchemeKind::Backward,
            step: 1,
            denominator: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Backward difference"));
        assert!(msg.contains("step 1"));
        assert_eq!(err.scheme(), Some(SchemeKind::Backward));
    }

    #[test]
    fn test_grid_error_has_no_scheme() {
        let err = FdmError::invalid_grid("N must be at least 1");
        assert_eq!(err.to_string(), "Invalid grid: N must be at least 1");
        assert!(err.scheme().is_none());
    }
}
