//! Common utilities for integration tests

pub mod helpers;

// Re-export commonly used items
pub use helpers::{
    assert_close,
    final_error,
    max_abs_deviation,
    reference_scenario,
    solve_scheme,
};
