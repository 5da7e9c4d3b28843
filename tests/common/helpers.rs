//! Helper functions for integration tests

#![allow(dead_code)]

use fdm_rs::problem::{ExactSolution, ProblemParams, Trajectory};
use fdm_rs::solver::{scheme_for, GridSpec, Scenario, SchemeKind};

/// λ = -1, T = 5, x0 = 1, N = 5, so h = 1 and every value is easy to check by hand
pub fn reference_scenario() -> Scenario {
    Scenario::initial_value_default().with_intervals(5)
}

/// March one scheme without rescaling
pub fn solve_scheme(kind: SchemeKind, lambda: f64, total_time: f64, intervals: usize) -> Trajectory {
    let grid = GridSpec::new(total_time, intervals).build().unwrap();
    let params = ProblemParams::initial_value(lambda, 1.0);
    scheme_for(kind).march(&grid, &params).unwrap()
}

/// Largest pointwise `|x_i - exact(t_i)|` over the grid
pub fn max_abs_deviation(kind: SchemeKind, lambda: f64, total_time: f64, intervals: usize) -> f64 {
    let grid = GridSpec::new(total_time, intervals).build().unwrap();
    let approx = solve_scheme(kind, lambda, total_time, intervals);
    let exact = ExactSolution::new(lambda, 1.0).evaluate(grid.times());

    approx
        .iter()
        .zip(exact.iter())
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, f64::max)
}

/// `|x_N - exact(T)|`
pub fn final_error(kind: SchemeKind, lambda: f64, total_time: f64, intervals: usize) -> f64 {
    let approx = solve_scheme(kind, lambda, total_time, intervals);
    let exact = ExactSolution::new(lambda, 1.0).value_at(total_time);
    (approx.last().unwrap() - exact).abs()
}

/// Assert two values agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: got {}, expected {} (diff {}, tolerance {})",
        message, actual, expected, diff, tolerance
    );
}
