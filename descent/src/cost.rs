use ndarray::{Array1, ArrayView1};

use crate::{Problem, engine::ParallelExecutor};

/// Computes the prediction errors of `theta`, that is, `X * theta - y`.
///
/// # Arguments
/// * `executor` - The executor used for the matrix-vector product.
/// * `problem` - The features and targets.
/// * `theta` - The current parameters.
///
/// # Panics
/// If the length of `theta` doesn't match the amount of features.
pub fn residuals<E>(executor: &E, problem: &Problem<'_>, theta: ArrayView1<'_, f64>) -> Array1<f64>
where
    E: ParallelExecutor + ?Sized,
{
    let mut h = executor.multiply(problem.x(), theta);
    h -= &problem.y();
    h
}

/// Halved mean squared error of `theta`: `J = sum((X * theta - y)^2) / (2 * m)`.
///
/// # Arguments
/// * `executor` - The executor used for the matrix-vector product.
/// * `problem` - The features and targets.
/// * `theta` - The parameters to evaluate.
///
/// # Returns
/// The cost, which is never negative.
///
/// # Panics
/// If the length of `theta` doesn't match the amount of features.
pub fn cost<E>(executor: &E, problem: &Problem<'_>, theta: ArrayView1<'_, f64>) -> f64
where
    E: ParallelExecutor + ?Sized,
{
    let m = problem.observations() as f64;
    let squared = residuals(executor, problem, theta)
        .iter()
        .fold(0.0, |acc, r| acc + r * r);

    squared / (2.0 * m)
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{DenseMatrix, engine::SequentialExecutor};

    fn line() -> (DenseMatrix, Array1<f64>) {
        let x = DenseMatrix::from_rows(&[vec![1., 1.], vec![1., 2.], vec![1., 3.]]).unwrap();
        (x, array![1., 2., 3.])
    }

    #[test]
    fn zero_on_exact_fit() {
        let (x, y) = line();
        let problem = Problem::new(&x, y.view()).unwrap();

        assert_eq!(cost(&SequentialExecutor, &problem, array![0., 1.].view()), 0.0);
    }

    #[test]
    fn halved_mean_of_squared_errors() {
        let (x, y) = line();
        let problem = Problem::new(&x, y.view()).unwrap();

        // (1 + 4 + 9) / (2 * 3)
        let j = cost(&SequentialExecutor, &problem, array![0., 0.].view());
        assert!((j - 14. / 6.).abs() < 1e-12);
    }

    #[test]
    fn residuals_are_prediction_minus_target() {
        let (x, y) = line();
        let problem = Problem::new(&x, y.view()).unwrap();

        let r = residuals(&SequentialExecutor, &problem, array![1., 0.].view());
        assert_eq!(r.to_vec(), vec![0., -1., -2.]);
    }

    #[test]
    fn never_negative() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let rows = rng.random_range(1..20);
            let cols = rng.random_range(1..6);
            let data = (0..rows * cols).map(|_| rng.random_range(-5.0..5.0)).collect();
            let x = DenseMatrix::from_shape_vec((rows, cols), data).unwrap();
            let y: Array1<f64> = (0..rows).map(|_| rng.random_range(-5.0..5.0)).collect();
            let theta: Array1<f64> = (0..cols).map(|_| rng.random_range(-5.0..5.0)).collect();
            let problem = Problem::new(&x, y.view()).unwrap();

            assert!(cost(&SequentialExecutor, &problem, theta.view()) >= 0.0);
        }
    }

    #[test]
    fn single_observation() {
        let x = DenseMatrix::from_rows(&[vec![2.]]).unwrap();
        let y = array![1.];
        let problem = Problem::new(&x, y.view()).unwrap();

        // (2 - 1)^2 / 2
        assert_eq!(cost(&SequentialExecutor, &problem, array![1.].view()), 0.5);
    }
}
