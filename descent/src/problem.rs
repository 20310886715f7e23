use ndarray::ArrayView1;

use crate::{DenseMatrix, DescentErr, Result};

/// A read-only linear regression problem: a feature matrix and its target vector.
///
/// Both are borrowed for the whole run, they can be shared by every row computation of an
/// executor but never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Problem<'a> {
    x: &'a DenseMatrix,
    y: ArrayView1<'a, f64>,
}

impl<'a> Problem<'a> {
    /// Creates a new `Problem`.
    ///
    /// # Arguments
    /// * `x` - The feature matrix, one row per observation.
    /// * `y` - The target vector, one value per observation.
    ///
    /// # Returns
    /// A new `Problem` or a `SizeMismatch` if `y` doesn't have one value per row of `x`.
    pub fn new(x: &'a DenseMatrix, y: ArrayView1<'a, f64>) -> Result<Self> {
        if y.len() != x.rows() {
            return Err(DescentErr::SizeMismatch {
                what: "targets",
                got: y.len(),
                expected: x.rows(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a DenseMatrix {
        self.x
    }

    pub fn y(&self) -> ArrayView1<'a, f64> {
        self.y
    }

    /// Returns the amount of observations (`m`).
    pub fn observations(&self) -> usize {
        self.x.rows()
    }

    /// Returns the amount of features (`n`), which is also the size of the parameter vector.
    pub fn features(&self) -> usize {
        self.x.cols()
    }

    /// Checks that a parameter vector has one entry per feature.
    pub fn check_theta(&self, theta: ArrayView1<'_, f64>) -> Result<()> {
        if theta.len() != self.features() {
            return Err(DescentErr::SizeMismatch {
                what: "theta",
                got: theta.len(),
                expected: self.features(),
            });
        }

        Ok(())
    }
}
