//! Example: Backward, Central and Forward Differences for x' = λx
//!
//! Runs the comparison twice on the classic teaching setup:
//!
//! - λ = -1, T = 5, x0 = 1
//! - Boundary value xT = e^{-5} (trajectories rescaled to hit it)
//!
//! First with N = 50 where every scheme tracks the exact decay, then with
//! N = 5 (h = 1) where forward collapses to zero and cannot be rescaled.
//!
//! Prints the discretization summary and writes a PNG figure and a CSV
//! file per run to the system temporary directory.

use fdm_rs::{
    output::{export_comparison_csv, plot_comparison, render_summary, CsvConfig, PlotConfig},
    solver::{solve_all, Scenario, SchemeKind},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Finite Differences for x' = λx");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();

    let runs = vec![
        ("fine", Scenario::boundary_value_default()),
        ("coarse", Scenario::boundary_value_default().with_intervals(5)),
    ];

    for (label, scenario) in &runs {
        println!("═══════════════════════════════════════════════════════");
        println!("  Run '{}': N = {}", label, scenario.grid.intervals);
        println!("═══════════════════════════════════════════════════════\n");

        let current_time = Instant::now();
        let comparison = solve_all(scenario)?;
        let elapsed_time = current_time.elapsed().as_secs_f64();

        println!("{}", render_summary(&comparison));

        println!("{:<10} {:>14} {:>14}", "Scheme", "x(T)", "max |error|");
        println!("{:-<40}", "");
        for kind in SchemeKind::ALL {
            match comparison.trajectory(kind) {
                Some(x) => {
                    let max_error = x
                        .iter()
                        .zip(comparison.exact.iter())
                        .map(|(a, e)| (a - e).abs())
                        .fold(0.0, f64::max);
                    let last = x.last().unwrap_or(f64::NAN);
                    println!("{:<10} {:>14.6e} {:>14.6e}", kind.label(), last, max_error);
                }
                None => println!("{:<10} {:>14} {:>14}", kind.label(), "failed", "-"),
            }
        }
        println!("\n  Solved in {:.3} ms\n", elapsed_time * 1e3);

        // ====== Outputs ======

        let plot_path = tmp_dir.join(format!("fdm_{label}.png"));
        let csv_path = tmp_dir.join(format!("fdm_{label}.csv"));

        let plot_config = PlotConfig::titled(format!(
            "λ = {}, T = {}, N = {}",
            comparison.params.lambda,
            comparison.grid.total_time(),
            comparison.grid.intervals()
        ));

        plot_comparison(&comparison, &plot_path.to_string_lossy(), Some(&plot_config))?;
        export_comparison_csv(
            &comparison,
            &csv_path.to_string_lossy(),
            Some(&CsvConfig::default().with_metadata()),
        )?;

        println!("  Plot : {:?}", plot_path);
        println!("  CSV  : {:?}\n", csv_path);
    }

    Ok(())
}
