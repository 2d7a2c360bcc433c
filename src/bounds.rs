//! Per-variable box bounds on the search space.

use crate::matrix::Matrix;

/// Lower and upper bounds for each decision variable.
///
/// Clipping is the only corrective step the operators apply; everything
/// else that violates a contract fails the call.
///
/// # Examples
///
/// ```
/// use evo_real::bounds::Bounds;
///
/// let bounds = Bounds::uniform(0.0, 1.0, 3).unwrap();
/// assert_eq!(bounds.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from per-variable lower/upper vectors.
    ///
    /// Returns `Err` if the vectors have different lengths, are empty,
    /// or any lower bound exceeds its upper bound.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, String> {
        if lower.len() != upper.len() {
            return Err(format!(
                "lower and upper bounds must have equal length ({} vs {})",
                lower.len(),
                upper.len()
            ));
        }
        if lower.is_empty() {
            return Err("bounds must cover at least one variable".into());
        }
        for (i, (lo, hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !(lo <= hi) {
                return Err(format!("lower bound {lo} exceeds upper bound {hi} at index {i}"));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates uniform bounds `[lo, hi]` repeated for `len` variables.
    pub fn uniform(lo: f64, hi: f64, len: usize) -> Result<Self, String> {
        Self::new(vec![lo; len], vec![hi; len])
    }

    /// Number of bounded variables.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Whether the bounds cover zero variables (never true for a
    /// successfully constructed value).
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Lower bound of variable `j`.
    pub fn lower(&self, j: usize) -> f64 {
        self.lower[j]
    }

    /// Upper bound of variable `j`.
    pub fn upper(&self, j: usize) -> f64 {
        self.upper[j]
    }

    /// Clamps every element of `values` into its column's interval.
    ///
    /// # Panics
    /// Panics if the matrix column count differs from the bound length.
    pub fn clip(&self, values: &mut Matrix) {
        assert_eq!(
            values.num_cols(),
            self.len(),
            "matrix has {} columns but bounds cover {} variables",
            values.num_cols(),
            self.len()
        );
        let cols = self.len();
        for i in 0..values.num_rows() {
            let row = values.row_mut(i);
            for j in 0..cols {
                row[j] = row[j].clamp(self.lower[j], self.upper[j]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_bounds() {
        let b = Bounds::uniform(-1.0, 1.0, 4).unwrap();
        assert_eq!(b.len(), 4);
        assert_eq!(b.lower(2), -1.0);
        assert_eq!(b.upper(2), 1.0);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        assert!(Bounds::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(Bounds::new(vec![2.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Bounds::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_clip() {
        let b = Bounds::new(vec![0.0, -1.0], vec![1.0, 1.0]).unwrap();
        let mut m = Matrix::from_rows(&[vec![-0.5, 2.0], vec![0.5, -3.0]]);
        b.clip(&mut m);
        assert_eq!(m.row(0), &[0.0, 1.0]);
        assert_eq!(m.row(1), &[0.5, -1.0]);
    }

    #[test]
    #[should_panic(expected = "bounds cover")]
    fn test_clip_wrong_width_panics() {
        let b = Bounds::uniform(0.0, 1.0, 3).unwrap();
        let mut m = Matrix::zeros(2, 2);
        b.clip(&mut m);
    }
}
