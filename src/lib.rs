pub mod config;
pub mod dataset;
pub mod device;
pub mod error;
pub mod report;
pub mod session;

pub use error::{HarnessErr, Result};
pub use session::{OptimizerKind, Session};
