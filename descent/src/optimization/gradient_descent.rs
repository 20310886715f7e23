use ndarray::Array1;

use super::Optimizer;
use crate::{
    Problem, cost,
    engine::{ParallelExecutor, dot},
};

/// Batch gradient descent: every parameter is updated at once from a single hypothesis.
///
/// The gradient is the raw sum `X^T * (X * theta - y)`, it's not averaged over the amount of
/// observations, the `learning_rate` has to absorb that scale.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on each iteration.
    ///
    /// # Returns
    /// A new `GradientDescent` instance.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    fn name(&self) -> &'static str {
        "gradient_descent"
    }

    fn step<E>(&mut self, executor: &E, problem: &Problem<'_>, theta: &mut Array1<f64>)
    where
        E: ParallelExecutor + ?Sized,
    {
        let residuals = cost::residuals(executor, problem, theta.view());
        let x = problem.x();

        let grad: Array1<f64> = (0..problem.features())
            .map(|j| dot(x.column(j), residuals.view()))
            .collect();

        let lr = self.learning_rate;
        for (w, g) in theta.iter_mut().zip(&grad) {
            *w -= lr * g;
        }
    }
}
