//! Uniform time grid
//!
//! A [`GridSpec`] is the user-facing description `(T, N)`. Calling
//! [`GridSpec::build`] validates it and produces a [`Grid`]: the step size
//! `h = T / N` and the `N + 1` sample times `t_i = i·h`.

use std::ops::RangeInclusive;

use crate::error::{FdmError, Result};

/// Default terminal time T
pub const DEFAULT_TOTAL_TIME: f64 = 5.0;

/// Default number of subintervals N
pub const DEFAULT_INTERVALS: usize = 50;

/// Resolutions the interactive tool offers. Values outside still build.
pub const RECOMMENDED_INTERVALS: RangeInclusive<usize> = 5..=400;

// =================================================================================================
// Grid specification
// =================================================================================================

/// Grid description: terminal time and number of subintervals
///
/// # Example
///
/// ```rust
/// use fdm_rs::solver::GridSpec;
///
/// let grid = GridSpec::new(5.0, 5).build()?;
/// assert_eq!(grid.h(), 1.0);
/// assert_eq!(grid.times(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// # Ok::<(), fdm_rs::FdmError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Terminal time T (> 0)
    pub total_time: f64,

    /// Number of subintervals N (>= 1)
    pub intervals: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_TIME, DEFAULT_INTERVALS)
    }
}

impl GridSpec {
    pub fn new(total_time: f64, intervals: usize) -> Self {
        Self { total_time, intervals }
    }

    /// Builder pattern: set T
    pub fn with_total_time(mut self, total_time: f64) -> Self {
        self.total_time = total_time;
        self
    }

    /// Builder pattern: set N
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    /// Check `T > 0`, `T` finite and `N >= 1`
    pub fn validate(&self) -> Result<()> {
        if !self.total_time.is_finite() {
            return Err(FdmError::invalid_grid(format!(
                "terminal time T = {} is not finite",
                self.total_time
            )));
        }
        if self.total_time <= 0.0 {
            return Err(FdmError::invalid_grid(format!(
                "terminal time T = {} must be positive",
                self.total_time
            )));
        }
        if self.intervals == 0 {
            return Err(FdmError::invalid_grid("number of subintervals N must be at least 1"));
        }
        Ok(())
    }

    /// Validate and realise the grid
    pub fn build(&self) -> Result<Grid> {
        self.validate()?;

        if !RECOMMENDED_INTERVALS.contains(&self.intervals) {
            log::warn!(
                "N = {} is outside the recommended range {}..={}",
                self.intervals,
                RECOMMENDED_INTERVALS.start(),
                RECOMMENDED_INTERVALS.end()
            );
        }

        let n = self.intervals;
        let h = self.total_time / n as f64;

        // t_i = i * h from the index, not by accumulation; t_N pinned to T
        let mut times: Vec<f64> = (0..=n).map(|i| i as f64 * h).collect();
        times[n] = self.total_time;

        log::debug!("grid built: T = {}, N = {}, h = {}", self.total_time, n, h);

        Ok(Grid { spec: *self, h, times })
    }
}

// =================================================================================================
// Realised grid
// =================================================================================================

/// Validated grid: step size and sample times
///
/// Only obtainable through [`GridSpec::build`], so `h > 0` and
/// `times().len() == intervals() + 1` always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    spec: GridSpec,
    h: f64,
    times: Vec<f64>,
}

impl Grid {
    /// Step size h = T / N
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Sample times `t_0 = 0, ..., t_N = T`
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn intervals(&self) -> usize {
        self.spec.intervals
    }

    /// Number of sample points, `N + 1`
    pub fn points(&self) -> usize {
        self.times.len()
    }

    pub fn total_time(&self) -> f64 {
        self.spec.total_time
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }
}
