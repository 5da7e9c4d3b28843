//! Three-panel comparison figure
//!
//! One panel per scheme, in the order backward, central, forward. Each panel
//! draws the exact solution as a solid black line and the scheme as a thinner
//! colored line with a marker on every sample. All panels share the same
//! y-range so the amplitudes compare directly.
//!
//! Non-finite samples are not drawn; the curve is broken there, which leaves
//! a visible gap. A scheme that failed gets a "(failed)" caption and its
//! error message in place of the curve.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fdm_rs::output::visualization::plot_comparison;
//!
//! let comparison = solve_all(&Scenario::boundary_value_default())?;
//! plot_comparison(&comparison, "schemes.png", None)?;
//! plot_comparison(&comparison, "schemes.svg", None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use crate::error::{FdmError, Result};
use crate::solver::{Comparison, SchemeKind};
use super::config::PlotConfig;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Split `(t, x)` pairs into runs of finite values
///
/// A NaN or infinite sample ends the current run; runs are never empty.
pub(crate) fn finite_segments(times: &[f64], values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&t, &x) in times.iter().zip(values.iter()) {
        if x.is_finite() {
            current.push((t, x));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Padded `(min, max)` over the finite values, `(-1, 1)` if there are none
pub(crate) fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|x| x.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));

    if min > max {
        return (-1.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        0.05 * span
    } else {
        0.5 * min.abs().max(1.0)
    };

    (min - pad, max + pad)
}

fn shared_range(comparison: &Comparison) -> (f64, f64) {
    let schemes = SchemeKind::ALL
        .iter()
        .filter_map(|&kind| comparison.trajectory(kind))
        .flat_map(|x| x.iter());

    value_range(comparison.exact.iter().chain(schemes))
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render the backward / central / forward comparison figure
///
/// # Arguments
///
/// * `comparison`  - Output of [`solve_all`](crate::solver::solve_all)
/// * `output_path` - Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// [`FdmError::Plot`] if the backend cannot draw or write to `output_path`.
pub fn plot_comparison(
    comparison: &Comparison,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let outcome = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, comparison, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, comparison, config)
        }
    };

    outcome.map_err(|e| FdmError::Plot { message: e.to_string() })?;
    log::debug!("comparison plot written to {output_path}");
    Ok(())
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    comparison: &Comparison,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = root.titled(&config.title, ("sans-serif", 28).into_font())?;
    let panels = root.split_evenly((1, 3));
    let y_range = shared_range(comparison);

    for (panel, kind) in panels.iter().zip(SchemeKind::ALL) {
        draw_panel(panel, comparison, kind, config, y_range)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    comparison: &Comparison,
    kind: SchemeKind,
    config: &PlotConfig,
    (y_min, y_max): (f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let outcome = comparison.scheme(kind);
    let caption = match outcome {
        Ok(_) => kind.name().to_string(),
        Err(_) => format!("{} (failed)", kind.name()),
    };

    let mut chart = ChartBuilder::on(panel)
        .caption(caption, ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(if kind == SchemeKind::Backward { 60 } else { 45 })
        .build_cartesian_2d(0.0..comparison.grid.total_time(), y_min..y_max)?;

    let y_desc = if kind == SchemeKind::Backward { config.ylabel.as_str() } else { "" };
    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(config.xlabel.as_str()).y_desc(y_desc).draw()?;

    // ====== Exact solution ======

    let exact_color = config.exact_color;
    let exact_style = ShapeStyle::from(&exact_color).stroke_width(config.line_width + 1);
    let exact_segments = finite_segments(comparison.times(), comparison.exact.as_slice());

    for (i, segment) in exact_segments.into_iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(segment, exact_style))?;
        if i == 0 {
            series
                .label("Exact")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &exact_color));
        }
    }

    // ====== Scheme ======

    match outcome {
        Ok(result) => {
            let color = config.scheme_color(kind);
            let style = ShapeStyle::from(&color).stroke_width(config.line_width);
            let segments = finite_segments(comparison.times(), result.trajectory.as_slice());

            for (i, segment) in segments.iter().enumerate() {
                let series = chart.draw_series(LineSeries::new(segment.iter().copied(), style))?;
                if i == 0 {
                    series
                        .label(kind.label())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
                }

                if config.marker_size > 0 {
                    chart.draw_series(
                        segment
                            .iter()
                            .map(|&(t, x)| Circle::new((t, x), config.marker_size, color.filled())),
                    )?;
                }
            }
        }
        Err(e) => {
            panel.draw(&Text::new(
                e.to_string(),
                (15, 45),
                ("sans-serif", 14).into_font().color(&RED),
            ))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
