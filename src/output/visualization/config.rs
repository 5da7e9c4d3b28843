//! Plot configuration for comparison figures

use plotters::prelude::*;

use crate::solver::SchemeKind;

/// Orange used for the central scheme
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Dark green used for the backward scheme
pub const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Configuration for customizing comparison plots
///
/// The figure is one row of three panels (backward, central, forward), each
/// overlaying a scheme on the exact solution. All panels share the y-axis.
///
/// # Example
///
/// ```rust,ignore
/// use fdm_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "λ = -3, N = 5".to_string();
/// config.scheme_colors = Some([BLUE, MAGENTA, CYAN]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1500)
    pub width: u32,

    /// Image height in pixels (default: 450)
    pub height: u32,

    /// Figure title (default: "Comparison of finite difference schemes")
    pub title: String,

    /// X-axis label (default: "Time t")
    pub xlabel: String,

    /// Y-axis label, first panel only (default: "x(t)")
    pub ylabel: String,

    /// Exact-solution line color (default: BLACK)
    pub exact_color: RGBColor,

    /// Optional colors for [backward, central, forward]
    ///
    /// If None, uses green, orange, red.
    pub scheme_colors: Option<[RGBColor; 3]>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius for scheme samples, 0 disables markers (default: 3)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 450,
            title: "Comparison of finite difference schemes".to_string(),
            xlabel: "Time t".to_string(),
            ylabel: "x(t)".to_string(),
            exact_color: BLACK,
            scheme_colors: None,
            background: WHITE,
            line_width: 2,
            marker_size: 3,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Default config with a custom title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Color of one scheme's curve
    pub(crate) fn scheme_color(&self, kind: SchemeKind) -> RGBColor {
        let index = match kind {
            SchemeKind::Backward => 0,
            SchemeKind::Central => 1,
            SchemeKind::Forward => 2,
        };

        match self.scheme_colors {
            Some(colors) => colors[index],
            None => [DARK_GREEN, ORANGE, RED][index],
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1500);
        assert_eq!(config.height, 450);
        assert_eq!(config.xlabel, "Time t");
        assert!(config.show_grid);
    }

    #[test]
    fn test_titled() {
        let config = PlotConfig::titled("Stiff decay");
        assert_eq!(config.title, "Stiff decay");
        assert_eq!(config.ylabel, "x(t)");
    }

    #[test]
    fn test_default_scheme_colors() {
        let config = PlotConfig::default();
        assert_eq!(config.scheme_color(SchemeKind::Backward), DARK_GREEN);
        assert_eq!(config.scheme_color(SchemeKind::Central), ORANGE);
        assert_eq!(config.scheme_color(SchemeKind::Forward), RED);
    }

    #[test]
    fn test_custom_scheme_colors() {
        let mut config = PlotConfig::default();
        config.scheme_colors = Some([BLUE, MAGENTA, CYAN]);
        assert_eq!(config.scheme_color(SchemeKind::Backward), BLUE);
        assert_eq!(config.scheme_color(SchemeKind::Forward), CYAN);
    }
}
