use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{DescentErr, Result};

/// A dense, row-major feature matrix with a fixed shape.
///
/// Every row is guaranteed to have the same amount of columns and there's always at least
/// one row, the shape can't change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Array2<f64>,
}

impl DenseMatrix {
    /// Builds a new `DenseMatrix` out of a jagged set of rows.
    ///
    /// # Arguments
    /// * `rows` - The rows of the matrix, all of them must have the same length.
    ///
    /// # Returns
    /// A new `DenseMatrix` or an error if `rows` is empty or ragged.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let first = rows.first().ok_or(DescentErr::EmptyMatrix)?;
        let cols = first.as_ref().len();

        for (i, row) in rows.iter().enumerate().skip(1) {
            let got = row.as_ref().len();
            if got != cols {
                return Err(DescentErr::RaggedRow {
                    row: i,
                    got,
                    expected: cols,
                });
            }
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }

        Self::from_shape_vec((rows.len(), cols), data)
    }

    /// Builds a new `DenseMatrix` out of row-major flat data.
    ///
    /// # Arguments
    /// * `shape` - The amount of (rows, columns).
    /// * `data` - The values of the matrix, one row after the other.
    ///
    /// # Returns
    /// A new `DenseMatrix` or an error if there are no rows or `data` doesn't fit the shape.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 {
            return Err(DescentErr::EmptyMatrix);
        }

        let got = data.len();
        let expected = rows.checked_mul(cols).ok_or(DescentErr::SizeMismatch {
            what: "matrix data",
            got,
            expected: usize::MAX,
        })?;

        let data = Array2::from_shape_vec(shape, data).map_err(|_| DescentErr::SizeMismatch {
            what: "matrix data",
            got,
            expected,
        })?;

        Ok(Self { data })
    }

    /// Returns the amount of rows (observations) in the matrix.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the amount of columns (features) in the matrix.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns a read-only view over the whole matrix.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Returns a view over the `j`-th column.
    ///
    /// # Panics
    /// If `j` is out of bounds.
    pub fn column(&self, j: usize) -> ArrayView1<'_, f64> {
        self.data.column(j)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DenseMatrix {
    type Error = DescentErr;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let x = DenseMatrix::from_rows(&[vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();

        assert_eq!(x.rows(), 2);
        assert_eq!(x.cols(), 3);
        assert_eq!(x.view()[[1, 0]], 4.);
        assert_eq!(x.column(2).to_vec(), vec![3., 6.]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = DenseMatrix::from_rows(&[vec![1., 2.], vec![3.]]).unwrap_err();

        assert!(matches!(
            err,
            DescentErr::RaggedRow {
                row: 1,
                got: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn from_rows_reports_the_first_ragged_row() {
        let rows = [vec![1.], vec![2.], vec![3., 4.], vec![]];
        let err = DenseMatrix::from_rows(&rows).unwrap_err();

        assert!(matches!(err, DescentErr::RaggedRow { row: 2, .. }));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let rows: [Vec<f64>; 0] = [];
        let err = DenseMatrix::from_rows(&rows).unwrap_err();

        assert!(matches!(err, DescentErr::EmptyMatrix));
    }

    #[test]
    fn from_shape_vec_checks_length() {
        let err = DenseMatrix::from_shape_vec((2, 2), vec![1., 2., 3.]).unwrap_err();

        assert!(matches!(
            err,
            DescentErr::SizeMismatch {
                got: 3,
                expected: 4,
                ..
            }
        ));
    }

    #[test]
    fn from_shape_vec_with_an_overflowing_shape() {
        let err = DenseMatrix::from_shape_vec((usize::MAX, 2), vec![1.]).unwrap_err();

        assert!(matches!(
            err,
            DescentErr::SizeMismatch {
                got: 1,
                expected: usize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn try_from_jagged_vec() {
        let x = DenseMatrix::try_from(vec![vec![1., 1.], vec![1., 2.]]).unwrap();
        let y = DenseMatrix::from_shape_vec((2, 2), vec![1., 1., 1., 2.]).unwrap();

        assert_eq!(x, y);
    }
}
