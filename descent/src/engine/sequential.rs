use ndarray::{ArrayView2, ArrayViewMut1};

use super::{ParallelExecutor, RowFn};

/// Reference executor, evaluates every row one after the other on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    /// Returns a new `SequentialExecutor`.
    pub fn new() -> Self {
        Self
    }
}

impl ParallelExecutor for SequentialExecutor {
    fn map_rows(
        &self,
        x: ArrayView2<'_, f64>,
        row_fn: &RowFn<'_>,
        mut out: ArrayViewMut1<'_, f64>,
    ) {
        assert_eq!(out.len(), x.nrows(), "output length must match the matrix rows");

        for (slot, row) in out.iter_mut().zip(x.rows()) {
            *slot = row_fn(row);
        }
    }
}
