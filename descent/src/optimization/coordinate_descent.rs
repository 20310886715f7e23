use ndarray::Array1;

use super::Optimizer;
use crate::{
    Problem, cost,
    engine::{ParallelExecutor, dot},
};

/// Cyclic coordinate descent: parameters are updated one at a time in ascending order.
///
/// The hypothesis is re-evaluated before every coordinate, so each update sees the ones made
/// earlier in the same iteration. Unlike `GradientDescent`, the partial derivative is scaled by
/// `1 / (2m)` before the learning rate is applied.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateDescent {
    learning_rate: f64,
}

impl CoordinateDescent {
    /// Creates a new `CoordinateDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on each coordinate.
    ///
    /// # Returns
    /// A new `CoordinateDescent` instance.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for CoordinateDescent {
    fn name(&self) -> &'static str {
        "coordinate_descent"
    }

    fn step<E>(&mut self, executor: &E, problem: &Problem<'_>, theta: &mut Array1<f64>)
    where
        E: ParallelExecutor + ?Sized,
    {
        let x = problem.x();
        let scale = 2.0 * problem.observations() as f64;

        for j in 0..problem.features() {
            let residuals = cost::residuals(executor, problem, theta.view());
            let grad = dot(x.column(j), residuals.view()) / scale;
            theta[j] -= self.learning_rate * grad;
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{DenseMatrix, engine::SequentialExecutor};

    #[test]
    fn later_coordinates_see_earlier_updates() {
        let x = DenseMatrix::from_rows(&[vec![1., 1.], vec![1., 2.], vec![1., 3.]]).unwrap();
        let y = array![1., 2., 3.];
        let problem = Problem::new(&x, y.view()).unwrap();
        let mut theta = array![0., 0.];

        CoordinateDescent::new(0.6).step(&SequentialExecutor, &problem, &mut theta);

        // j = 0: grad = -6 / 6 = -1, theta0 = 0.6
        // j = 1: residuals = [-0.4, -1.4, -2.4], grad = -10.4 / 6, theta1 = 1.04
        assert!((theta[0] - 0.6).abs() < 1e-12);
        assert!((theta[1] - 1.04).abs() < 1e-12);
    }

    #[test]
    fn zero_learning_rate_keeps_parameters() {
        let x = DenseMatrix::from_rows(&[vec![1., 4.], vec![2., 5.]]).unwrap();
        let y = array![3., 7.];
        let problem = Problem::new(&x, y.view()).unwrap();
        let mut theta = array![0.5, -0.5];

        CoordinateDescent::new(0.0).step(&SequentialExecutor, &problem, &mut theta);

        assert_eq!(theta, array![0.5, -0.5]);
    }
}
