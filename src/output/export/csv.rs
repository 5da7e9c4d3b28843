//! CSV export of comparison runs
//!
//! One row per grid point, one column per trajectory:
//!
//! ```csv
//! # Finite Difference Comparison
//! # Generated: 2026-10-16T09:30:00+00:00
//! # lambda: -1
//! # T: 5
//! # N: 5
//! # h: 1
//! # x0: 1
//! # stability: forward scheme stable (|1 + hλ| = 0.0000 < 1)
//! #
//! t,exact,backward,central,forward
//! 0.000000,1.000000,1.000000,1.000000,1.000000
//! 1.000000,0.367879,0.500000,0.367879,0.000000
//! ...
//! ```
//!
//! A scheme that failed is written as a column of `NaN` and named in the
//! metadata header. Non-finite samples are written verbatim (`NaN`, `inf`,
//! `-inf`) because they are part of the result.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{FdmError, Result};
use crate::solver::{Comparison, SchemeKind};

use super::Exporter;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use fdm_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10).with_metadata();
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Write `#` comment lines with the run parameters (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter, comma as decimal point
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata header
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.delimiter == self.decimal_separator {
            return Err(FdmError::InvalidExport {
                message: format!(
                    "delimiter and decimal separator are both '{}'",
                    self.delimiter
                ),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = FdmError;

    fn export(&self, comparison: &Comparison, path: &str) -> Result<()> {
        export_comparison_csv(comparison, path, Some(&self.config))
    }
}

/// Write a comparison to `output_path`
///
/// Columns: `t`, `exact`, then the schemes in display order.
///
/// # Errors
///
/// - [`FdmError::InvalidExport`] when delimiter and decimal separator clash
/// - [`FdmError::Export`] on file creation or write failure
pub fn export_comparison_csv(
    comparison: &Comparison,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    write_comparison(&mut writer, comparison, configuration)?;
    writer.flush()?;

    log::debug!("comparison exported to {output_path}");
    Ok(())
}

/// Write a comparison to any sink
pub fn write_comparison<W: Write>(
    writer: &mut W,
    comparison: &Comparison,
    configuration: &CsvConfig,
) -> Result<()> {
    if configuration.include_metadata {
        write_metadata_header(writer, comparison)?;
    }

    let delimiter = configuration.delimiter;

    // ============================= Header =================================

    write!(writer, "t{delimiter}exact")?;
    for kind in SchemeKind::ALL {
        write!(writer, "{delimiter}{}", kind.label())?;
    }
    writeln!(writer)?;

    // ============================= Data ===================================

    let columns: Vec<Option<&[f64]>> = SchemeKind::ALL
        .iter()
        .map(|&kind| comparison.trajectory(kind).map(|x| x.as_slice()))
        .collect();

    for (i, t) in comparison.times().iter().enumerate() {
        write!(writer, "{}", format_number(*t, configuration))?;
        write!(writer, "{delimiter}{}", format_number(comparison.exact[i], configuration))?;

        for column in &columns {
            let value = column.map_or(f64::NAN, |x| x[i]);
            write!(writer, "{delimiter}{}", format_number(value, configuration))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(writer: &mut W, comparison: &Comparison) -> Result<()> {
    let params = &comparison.params;

    writeln!(writer, "# Finite Difference Comparison")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(writer, "# lambda: {}", params.lambda)?;
    writeln!(writer, "# T: {}", comparison.grid.total_time())?;
    writeln!(writer, "# N: {}", comparison.grid.intervals())?;
    writeln!(writer, "# h: {}", comparison.h())?;
    writeln!(writer, "# x0: {}", params.x0)?;
    if let Some(terminal) = params.terminal {
        writeln!(writer, "# xT: {terminal}")?;
    }
    writeln!(writer, "# stability: {}", comparison.stability.commentary())?;

    for (kind, error) in comparison.failures() {
        writeln!(writer, "# {} failed: {error}", kind.label())?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format with configured precision and decimal separator
///
/// Non-finite values keep Rust's spelling (`NaN`, `inf`, `-inf`).
fn format_number(value: f64, config: &CsvConfig) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_all, Scenario};
    use std::fs;
    use tempfile::NamedTempFile;

    fn reference() -> Comparison {
        solve_all(&Scenario::default().with_intervals(5)).unwrap()
    }

    fn to_string(comparison: &Comparison, config: &CsvConfig) -> String {
        let mut buffer = Vec::new();
        write_comparison(&mut buffer, comparison, config).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_row_count() {
        let text = to_string(&reference(), &CsvConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "t,exact,backward,central,forward");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_second_row_values() {
        let text = to_string(&reference(), &CsvConfig::default());
        let row: Vec<&str> = text.lines().nth(2).unwrap().split(',').collect();

        assert_eq!(row[0], "1.000000");
        assert_eq!(row[1], "0.367879");
        assert_eq!(row[2], "0.500000");
        assert_eq!(row[3], "0.367879");
        assert_eq!(row[4], "0.000000");
    }

    #[test]
    fn test_european_format() {
        let text = to_string(&reference(), &CsvConfig::european().precision(2));
        assert_eq!(text.lines().nth(2).unwrap(), "1,00;0,37;0,50;0,37;0,00");
    }

    #[test]
    fn test_failed_scheme_written_as_nan() {
        let scenario = Scenario::default()
            .with_lambda(2.0)
            .with_total_time(1.0)
            .with_intervals(2);
        let comparison = solve_all(&scenario).unwrap();
        let text = to_string(&comparison, &CsvConfig::default().with_metadata());

        assert!(text.contains("# backward failed"));
        let last = text.lines().last().unwrap();
        assert_eq!(last.split(',').nth(2), Some("NaN"));
    }

    #[test]
    fn test_metadata_header() {
        let comparison = solve_all(&Scenario::boundary_value_default()).unwrap();
        let text = to_string(&comparison, &CsvConfig::default().with_metadata());

        assert!(text.starts_with("# Finite Difference Comparison"));
        assert!(text.contains("# lambda: -1"));
        assert!(text.contains("# N: 50"));
        assert!(text.contains("# xT: "));
        assert!(text.contains("# stability: "));
    }

    #[test]
    fn test_clashing_separators_rejected() {
        let tmp = NamedTempFile::new().unwrap();
        let config = CsvConfig::default().delimiter('.');
        let err = export_comparison_csv(&reference(), tmp.path().to_str().unwrap(), Some(&config))
            .unwrap_err();
        assert!(matches!(err, FdmError::InvalidExport { .. }));
    }

    #[test]
    fn test_export_to_file() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();

        CsvExporter::default().export(&reference(), path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("t,exact"));
        assert_eq!(content.lines().count(), 7);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let err = export_comparison_csv(&reference(), "/nonexistent/dir/out.csv", None).unwrap_err();
        assert!(matches!(err, FdmError::Export(_)));
    }
}
