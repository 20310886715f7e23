pub mod cost;
pub mod engine;
pub mod error;
mod matrix;
pub mod optimization;
mod problem;
mod run;

pub use cost::cost;
pub use error::{DescentErr, Result};
pub use matrix::DenseMatrix;
pub use problem::Problem;
pub use run::{RunResult, optimize, run_coordinate_descent, run_gradient_descent};
