mod coordinate_descent;
mod gradient_descent;
mod optimizer;

pub use coordinate_descent::CoordinateDescent;
pub use gradient_descent::GradientDescent;
pub use optimizer::Optimizer;
