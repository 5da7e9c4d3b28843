//! Export module for comparison runs.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file and no change to existing code.
//!
//! # Available formats
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use fdm_rs::output::export::{CsvExporter, Exporter};
//!
//! let comparison = solve_all(&Scenario::default())?;
//! CsvExporter::default().export(&comparison, "comparison.csv")?;
//! ```

pub mod csv;

pub use csv::{export_comparison_csv, write_comparison, CsvConfig, CsvExporter};

use crate::solver::Comparison;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, which avoids
/// boxing and lets the caller react to the concrete failure.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Writes every trajectory of `comparison` to `path`.
    ///
    /// Failed schemes are still represented (as missing values) so the
    /// column layout does not depend on the outcome.
    fn export(&self, comparison: &Comparison, path: &str) -> Result<(), Self::Error>;
}
