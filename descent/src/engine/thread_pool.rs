use std::num::NonZeroUsize;

use log::debug;
use ndarray::{ArrayView2, ArrayViewMut1, Zip};
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::{ParallelExecutor, RowFn};
use crate::Result;

/// CPU executor backed by a dedicated rayon thread pool.
///
/// The pool is owned by the executor: it's spawned on `acquire` and dropping the executor
/// signals its threads to terminate. The threads exit on their own shortly after, the drop
/// doesn't wait for them.
#[derive(Debug)]
pub struct ThreadPoolExecutor {
    pool: ThreadPool,
}

impl ThreadPoolExecutor {
    /// Spawns a new thread pool and wraps it into an executor.
    ///
    /// # Arguments
    /// * `threads` - The amount of worker threads, `None` lets rayon pick one per logical CPU.
    ///
    /// # Returns
    /// A new `ThreadPoolExecutor` or a `DescentErr::Device` if the pool couldn't be spawned.
    pub fn acquire(threads: Option<NonZeroUsize>) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("descent-row-{i}"));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads.get());
        }

        let pool = builder.build()?;
        debug!(threads = pool.current_num_threads(); "acquired thread pool");
        Ok(Self { pool })
    }

    /// Returns the amount of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ParallelExecutor for ThreadPoolExecutor {
    fn map_rows(&self, x: ArrayView2<'_, f64>, row_fn: &RowFn<'_>, out: ArrayViewMut1<'_, f64>) {
        assert_eq!(out.len(), x.nrows(), "output length must match the matrix rows");

        self.pool.install(|| {
            Zip::from(out)
                .and(x.rows())
                .par_for_each(|slot, row| *slot = row_fn(row));
        });
    }
}

impl Drop for ThreadPoolExecutor {
    fn drop(&mut self) {
        debug!(threads = self.pool.current_num_threads(); "signaling thread pool to terminate");
    }
}
