//! Plain-text discretization summary
//!
//! Renders the narration shown next to the plots: step size, one line per
//! scheme, and the forward-stability verdict. Failed schemes are listed with
//! their error so nothing is silently dropped.

use crate::solver::{Comparison, SchemeKind};

/// Qualitative behaviour of each stencil on `x' = λx`
pub fn scheme_remark(kind: SchemeKind, lambda: f64) -> &'static str {
    match kind {
        SchemeKind::Backward if lambda < 0.0 => "monotone and accurate for λ < 0",
        SchemeKind::Backward => "implicit-style, singular when hλ = 1",
        SchemeKind::Central => "higher order but prone to oscillatory artifacts",
        SchemeKind::Forward => "smooth but typically less accurate globally",
    }
}

/// Multi-line summary of a comparison run
///
/// # Example
///
/// ```rust
/// use fdm_rs::output::render_summary;
/// use fdm_rs::solver::{solve_all, Scenario};
///
/// let comparison = solve_all(&Scenario::default())?;
/// let text = render_summary(&comparison);
/// assert!(text.contains("h = 0.1000"));
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
pub fn render_summary(comparison: &Comparison) -> String {
    let params = &comparison.params;

    let mut lines = vec![
        "Discretization summary".to_string(),
        format!("Step size: h = {:.4}", comparison.h()),
        format!(
            "λ = {}, T = {}, N = {}, x0 = {}",
            params.lambda,
            comparison.grid.total_time(),
            comparison.grid.intervals(),
            params.x0
        ),
        match params.terminal {
            Some(terminal) => format!("Boundary value x(T) = {terminal:.4} (trajectories rescaled)"),
            None => "Initial value problem (no terminal rescaling)".to_string(),
        },
        String::new(),
    ];

    for kind in SchemeKind::ALL {
        let name = kind.name().to_lowercase();
        lines.push(match comparison.scheme(kind) {
            Ok(_) => format!("• {name} – {}", scheme_remark(kind, params.lambda)),
            Err(e) => format!("• {name} – FAILED: {e}"),
        });
    }

    lines.push(String::new());
    lines.push(format!("Stability: {}", comparison.stability.commentary()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_all, Scenario};

    #[test]
    fn test_summary_reference_case() {
        let comparison = solve_all(&Scenario::default().with_intervals(5)).unwrap();
        let text = render_summary(&comparison);

        assert!(text.starts_with("Discretization summary"));
        assert!(text.contains("h = 1.0000"));
        assert!(text.contains("• backward difference – monotone and accurate for λ < 0"));
        assert!(text.contains("• central difference – higher order"));
        assert!(text.contains("• forward difference – smooth"));
        assert!(text.contains("Initial value problem"));
        assert!(text.contains("stable"));
    }

    #[test]
    fn test_summary_reports_failure() {
        let scenario = Scenario::default()
            .with_lambda(2.0)
            .with_total_time(1.0)
            .with_intervals(2);
        let comparison = solve_all(&scenario).unwrap();
        let text = render_summary(&comparison);

        assert!(text.contains("• backward difference – FAILED"));
        assert!(text.contains("singular"));
        assert!(text.contains("UNSTABLE"));
    }

    #[test]
    fn test_summary_boundary_value() {
        let comparison = solve_all(&Scenario::boundary_value_default()).unwrap();
        let text = render_summary(&comparison);
        assert!(text.contains("Boundary value x(T) = 0.0067"));
    }

    #[test]
    fn test_backward_remark_depends_on_sign() {
        assert_eq!(scheme_remark(SchemeKind::Backward, -1.0), "monotone and accurate for λ < 0");
        assert_ne!(scheme_remark(SchemeKind::Backward, 1.0), "monotone and accurate for λ < 0");
    }
}
