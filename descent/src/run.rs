use log::{debug, trace};
use ndarray::{Array1, ArrayView1};

use crate::{
    DenseMatrix, Problem, Result,
    cost::cost,
    engine::ParallelExecutor,
    optimization::{CoordinateDescent, GradientDescent, Optimizer},
};

/// The outcome of a single optimizer run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    theta: Array1<f64>,
    cost_history: Vec<f64>,
}

impl RunResult {
    /// Returns the parameters after the last iteration.
    pub fn theta(&self) -> &Array1<f64> {
        &self.theta
    }

    /// Returns the cost recorded after each iteration, in order.
    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    /// Consumes the result returning its parts.
    pub fn into_parts(self) -> (Array1<f64>, Vec<f64>) {
        (self.theta, self.cost_history)
    }
}

/// Runs `iterations` steps of an optimizer starting from `theta0`.
///
/// The parameters are copied out of `theta0` before the first step, the caller's vector is
/// never modified. One cost value is recorded after each step, there's no early stopping.
///
/// # Arguments
/// * `optimizer` - The update strategy.
/// * `executor` - The executor used for every matrix-vector product.
/// * `problem` - The features and targets.
/// * `theta0` - The initial guess, one entry per feature.
/// * `iterations` - The exact amount of iterations to perform.
///
/// # Returns
/// The final parameters and the cost history, or a `SizeMismatch` if `theta0` doesn't have
/// one entry per feature.
pub fn optimize<O, E>(
    optimizer: &mut O,
    executor: &E,
    problem: &Problem<'_>,
    theta0: ArrayView1<'_, f64>,
    iterations: usize,
) -> Result<RunResult>
where
    O: Optimizer,
    E: ParallelExecutor + ?Sized,
{
    problem.check_theta(theta0)?;

    let name = optimizer.name();
    let mut theta = theta0.to_owned();
    let mut cost_history = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        optimizer.step(executor, problem, &mut theta);

        let j = cost(executor, problem, theta.view());
        trace!(optimizer = name, iteration = iteration, cost = j; "iteration finished");
        cost_history.push(j);
    }

    debug!(
        optimizer = name,
        iterations = iterations,
        final_cost = cost_history.last().copied().unwrap_or(f64::NAN);
        "run finished"
    );

    Ok(RunResult {
        theta,
        cost_history,
    })
}

/// Fits `theta` with batch gradient descent.
///
/// # Arguments
/// * `executor` - The executor used for every matrix-vector product.
/// * `theta0` - The initial guess, copied before the first step.
/// * `x` - The feature matrix.
/// * `y` - The target vector.
/// * `alpha` - The learning rate.
/// * `iterations` - The exact amount of iterations to perform.
///
/// # Returns
/// The run result or a `SizeMismatch` if the shapes of `theta0`, `x` and `y` disagree.
pub fn run_gradient_descent<E>(
    executor: &E,
    theta0: ArrayView1<'_, f64>,
    x: &DenseMatrix,
    y: ArrayView1<'_, f64>,
    alpha: f64,
    iterations: usize,
) -> Result<RunResult>
where
    E: ParallelExecutor + ?Sized,
{
    let problem = Problem::new(x, y)?;
    let mut optimizer = GradientDescent::new(alpha);
    optimize(&mut optimizer, executor, &problem, theta0, iterations)
}

/// Fits `theta` with cyclic coordinate descent.
///
/// Same arguments and errors as [`run_gradient_descent`].
pub fn run_coordinate_descent<E>(
    executor: &E,
    theta0: ArrayView1<'_, f64>,
    x: &DenseMatrix,
    y: ArrayView1<'_, f64>,
    alpha: f64,
    iterations: usize,
) -> Result<RunResult>
where
    E: ParallelExecutor + ?Sized,
{
    let problem = Problem::new(x, y)?;
    let mut optimizer = CoordinateDescent::new(alpha);
    optimize(&mut optimizer, executor, &problem, theta0, iterations)
}
