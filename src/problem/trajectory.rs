//! Sampled solution container
//!
//! A [`Trajectory`] holds one value per grid point. It is built once and
//! never modified; operations such as rescaling return a new trajectory.

use nalgebra::DVector;
use std::fmt;
use std::ops::Index;

/// Values `x[0..=N]` of an exact or approximate solution on a grid
///
/// Backed by a `DVector<f64>`. Non-finite samples are legal: they are how
/// overflow shows up and are kept as is.
///
/// # Example
///
/// ```rust
/// use fdm_rs::problem::Trajectory;
///
/// let x = Trajectory::from_vec(vec![1.0, 0.5, 0.25]);
/// assert_eq!(x.len(), 3);
/// assert_eq!(x.last(), Some(0.25));
///
/// let doubled = x.scaled(2.0);
/// assert_eq!(doubled[2], 0.5);
/// assert_eq!(x[2], 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    values: DVector<f64>,
}

impl Trajectory {
    /// Wrap an existing vector
    pub fn new(values: DVector<f64>) -> Self {
        Self { values }
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::new(DVector::from_vec(values))
    }

    pub fn from_iterator<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }

    /// Number of samples (`N + 1` for a grid with `N` intervals)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn last(&self) -> Option<f64> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Whether every sample is finite
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }

    /// Index of the first NaN or infinite sample
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|x| !x.is_finite())
    }

    /// New trajectory with every sample multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(&self.values * factor)
    }
}

impl Index<usize> for Trajectory {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<Vec<f64>> for Trajectory {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.6}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        let x = Trajectory::from_vec(vec![3.0, 2.0, 1.0]);
        assert_eq!(x.first(), Some(3.0));
        assert_eq!(x.last(), Some(1.0));

        let empty = Trajectory::from_vec(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_scaled_leaves_original_untouched() {
        let x = Trajectory::from_vec(vec![1.0, -2.0]);
        let y = x.scaled(-0.5);
        assert_eq!(y.to_vec(), vec![-0.5, 1.0]);
        assert_eq!(x.to_vec(), vec![1.0, -2.0]);
    }

    #[test]
    fn test_first_non_finite() {
        let x = Trajectory::from_vec(vec![1.0, f64::INFINITY, f64::NAN]);
        assert!(!x.is_finite());
        assert_eq!(x.first_non_finite(), Some(1));

        let y = Trajectory::from_vec(vec![1.0, 2.0]);
        assert!(y.is_finite());
        assert_eq!(y.first_non_finite(), None);
    }

    #[test]
    fn test_display() {
        let x = Trajectory::from_vec(vec![1.0, 0.5]);
        assert_eq!(x.to_string(), "[1.000000, 0.500000]");
    }
}
