use ndarray::Array1;

use crate::{Problem, engine::ParallelExecutor};

/// Defines the strategy for updating the parameters of a linear model during one iteration.
pub trait Optimizer {
    /// A short human readable name, used for logging.
    fn name(&self) -> &'static str;

    /// Performs one full iteration over the parameters, updating them in place.
    ///
    /// # Arguments
    /// * `executor` - The executor used to evaluate the hypothesis.
    /// * `problem` - The features and targets.
    /// * `theta` - The parameters, already validated to have one entry per feature.
    fn step<E>(&mut self, executor: &E, problem: &Problem<'_>, theta: &mut Array1<f64>)
    where
        E: ParallelExecutor + ?Sized;
}
