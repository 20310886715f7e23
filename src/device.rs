use descent::engine::{ParallelExecutor, RowFn, SequentialExecutor, ThreadPoolExecutor};
use ndarray::{ArrayView2, ArrayViewMut1};

use crate::config::DeviceConfig;

/// An acquired compute device. Its resources are released when it's dropped.
#[derive(Debug)]
pub enum Device {
    Sequential(SequentialExecutor),
    ThreadPool(ThreadPoolExecutor),
}

impl Device {
    /// Acquires the device described by `config`.
    ///
    /// # Errors
    /// `DescentErr::Device` if the underlying resources can't be allocated, there is no
    /// fallback to a different device.
    pub fn acquire(config: DeviceConfig) -> descent::Result<Self> {
        let device = match config {
            DeviceConfig::Sequential => Self::Sequential(SequentialExecutor::new()),
            DeviceConfig::ThreadPool { threads } => {
                Self::ThreadPool(ThreadPoolExecutor::acquire(threads)?)
            }
        };

        Ok(device)
    }
}

impl ParallelExecutor for Device {
    fn map_rows(&self, x: ArrayView2<'_, f64>, row_fn: &RowFn<'_>, out: ArrayViewMut1<'_, f64>) {
        match self {
            Self::Sequential(e) => e.map_rows(x, row_fn, out),
            Self::ThreadPool(e) => e.map_rows(x, row_fn, out),
        }
    }
}
