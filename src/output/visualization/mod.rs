//! Visualization of comparison runs
//!
//! This module draws the backward / central / forward comparison figure using
//! the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **comparison**: The three-panel figure (`plot_comparison`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fdm_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! let comparison = solve_all(&scenario)?;
//!
//! // Default config
//! plot_comparison(&comparison, "schemes.png", None)?;
//!
//! // Custom title, vector output
//! let config = PlotConfig::titled("Stiff decay, λ = -20");
//! plot_comparison(&comparison, "stiff.svg", Some(&config))?;
//! ```

pub mod config;
pub mod comparison;

pub use config::PlotConfig;
pub use comparison::plot_comparison;
