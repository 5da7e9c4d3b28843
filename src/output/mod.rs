//! Output module for comparison runs
//!
//! This module turns a [`Comparison`](crate::solver::Comparison) into
//! something a person or another program can consume:
//! - **Summary**: the plain-text discretization summary
//! - **Visualization**: the three-panel PNG/SVG figure using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── summary.rs          ← Narration text
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── comparison.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fdm_rs::output::{export_comparison_csv, plot_comparison, render_summary};
//!
//! let comparison = solve_all(&Scenario::boundary_value_default())?;
//!
//! println!("{}", render_summary(&comparison));
//! plot_comparison(&comparison, "schemes.png", None)?;
//! export_comparison_csv(&comparison, "schemes.csv", None)?;
//! ```
//!
//! None of these helpers alter the comparison; they only read it.

pub mod summary;
pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use summary::{render_summary, scheme_remark};

pub use visualization::{plot_comparison, PlotConfig};

pub use export::{export_comparison_csv, CsvConfig, CsvExporter, Exporter};
