use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1};

use crate::DenseMatrix;

/// A row function, maps a single row of a matrix into a scalar.
pub type RowFn<'f> = dyn for<'r> Fn(ArrayView1<'r, f64>) -> f64 + Sync + 'f;

/// A compute device capable of evaluating independent per-row computations over a matrix.
///
/// Rows have no dependency between them, each one writes exactly one slot of the output, so
/// implementations may schedule them in any order and on any number of execution units. They
/// must however finish every row before returning.
pub trait ParallelExecutor: Sync {
    /// Computes `out[i] = row_fn(x.row(i))` for every row of `x`.
    ///
    /// # Arguments
    /// * `x` - The matrix whose rows are mapped.
    /// * `row_fn` - The per-row computation.
    /// * `out` - Where to write the results, one slot per row.
    ///
    /// # Panics
    /// If the length of `out` doesn't match the amount of rows in `x`.
    fn map_rows(&self, x: ArrayView2<'_, f64>, row_fn: &RowFn<'_>, out: ArrayViewMut1<'_, f64>);

    /// Multiplies a matrix by a vector, that is, `result[i] = sum_j(x[i, j] * v[j])`.
    ///
    /// Each row's dot product is accumulated sequentially in column order, so every executor
    /// yields the exact same bits for the same inputs.
    ///
    /// # Arguments
    /// * `x` - The left hand side matrix.
    /// * `v` - The right hand side vector.
    ///
    /// # Returns
    /// A vector with one entry per row of `x`.
    ///
    /// # Panics
    /// If the length of `v` doesn't match the amount of columns in `x`.
    fn multiply(&self, x: &DenseMatrix, v: ArrayView1<'_, f64>) -> Array1<f64> {
        assert_eq!(
            v.len(),
            x.cols(),
            "vector length must match the matrix columns"
        );

        let mut out = Array1::zeros(x.rows());
        self.map_rows(x.view(), &|row: ArrayView1<'_, f64>| dot(row, v), out.view_mut());
        out
    }
}

/// Dot product of two equally sized vectors, summed left to right.
pub(crate) fn dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).fold(0.0, |acc, (a, b)| acc + a * b)
}
