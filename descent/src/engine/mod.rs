mod executor;
mod sequential;
mod thread_pool;

pub(crate) use executor::dot;
pub use executor::{ParallelExecutor, RowFn};
pub use sequential::SequentialExecutor;
pub use thread_pool::ThreadPoolExecutor;
