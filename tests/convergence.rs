//! Convergence tests for the finite-difference schemes
//!
//! These tests verify that each scheme exhibits its expected order when
//! the step is halved: first order for backward and forward, second order
//! for central.

use fdm_rs::solver::SchemeKind;

mod common;
use common::{final_error, max_abs_deviation};

const LAMBDA: f64 = -0.3;
const TOTAL_TIME: f64 = 10.0;

fn convergence_ratios(
    error: fn(SchemeKind, f64, f64, usize) -> f64,
    kind: SchemeKind,
    steps_list: &[usize],
) -> Vec<f64> {
    let errors: Vec<f64> = steps_list
        .iter()
        .map(|&n| error(kind, LAMBDA, TOTAL_TIME, n))
        .collect();

    errors.windows(2).map(|pair| pair[0] / pair[1]).collect()
}

#[test]
fn test_forward_first_order_convergence() {
    // error ~ O(h): halving h should halve the error
    for ratio in convergence_ratios(final_error, SchemeKind::Forward, &[100, 200, 400, 800]) {
        println!("Forward convergence ratio: {}", ratio);
        assert!(ratio > 1.8 && ratio < 2.2, "Convergence ratio {} not first-order", ratio);
    }
}

#[test]
fn test_backward_first_order_convergence() {
    for ratio in convergence_ratios(final_error, SchemeKind::Backward, &[100, 200, 400, 800]) {
        println!("Backward convergence ratio: {}", ratio);
        assert!(ratio > 1.8 && ratio < 2.2, "Convergence ratio {} not first-order", ratio);
    }
}

#[test]
fn test_central_second_order_convergence() {
    // error ~ O(h²): halving h should quarter the error.
    // The alternating mode makes x[N] alone uneven, so measure over the whole grid.
    for ratio in convergence_ratios(max_abs_deviation, SchemeKind::Central, &[100, 200, 400, 800]) {
        println!("Central convergence ratio: {}", ratio);
        assert!(ratio > 3.0 && ratio < 5.0, "Convergence ratio {} not second-order", ratio);
    }
}

#[test]
fn test_max_deviation_shrinks_with_refinement() {
    let steps_list = [50, 100, 200, 400];

    for kind in SchemeKind::ALL {
        let errors: Vec<f64> = steps_list
            .iter()
            .map(|&n| max_abs_deviation(kind, -1.0, 5.0, n))
            .collect();

        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "{kind}: {:?} is not decreasing", errors);
        }

        // 8× finer grid: at least 5× smaller for first order, far more for central
        let gain = errors[0] / errors[errors.len() - 1];
        assert!(gain > 5.0, "{kind}: refinement gain only {gain}");
    }
}

#[test]
fn test_central_is_more_accurate_than_first_order_schemes() {
    let central = final_error(SchemeKind::Central, LAMBDA, TOTAL_TIME, 200);
    let backward = final_error(SchemeKind::Backward, LAMBDA, TOTAL_TIME, 200);
    let forward = final_error(SchemeKind::Forward, LAMBDA, TOTAL_TIME, 200);

    assert!(central < backward);
    assert!(central < forward);
}
