use std::{sync::Arc, time::Instant};

use log::info;
use ndarray::Array1;
use tokio::task::{self, JoinHandle};

use crate::{
    Result,
    config::{DeviceConfig, RunConfig},
    dataset::Dataset,
    device::Device,
    report::{Report, RunReport},
};

/// The two update strategies being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    GradientDescent,
    CoordinateDescent,
}

impl OptimizerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::GradientDescent => "gradient_descent",
            Self::CoordinateDescent => "coordinate_descent",
        }
    }
}

/// A comparison of both optimizers over a single dataset.
///
/// Every run receives its own copy of the initial parameters and acquires its own device, the
/// two optimizers never observe each other's state.
pub struct Session {
    config: RunConfig,
    dataset: Arc<Dataset>,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `config` - The run configuration, validated here.
    /// * `dataset` - The dataset both optimizers are fitted on.
    ///
    /// # Returns
    /// A new `Session` or `HarnessErr::InvalidConfig`.
    pub fn new(config: RunConfig, dataset: Dataset) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            dataset: Arc::new(dataset),
        })
    }

    /// Runs both optimizers, coordinate descent first unless the config asks for them to run
    /// concurrently.
    ///
    /// # Returns
    /// Both reports, or the first error any of the runs produced. When running concurrently
    /// both runs are awaited to completion before an error is returned.
    pub async fn run(&self) -> Result<Report> {
        info!(
            learning_rate = self.config.learning_rate,
            iterations = self.config.iterations,
            concurrent = self.config.concurrent;
            "starting comparison"
        );

        let (coordinate_descent, gradient_descent) = if self.config.concurrent {
            let cd = self.spawn(OptimizerKind::CoordinateDescent);
            let gd = self.spawn(OptimizerKind::GradientDescent);
            join_both(cd, gd).await?
        } else {
            let cd = self.spawn(OptimizerKind::CoordinateDescent).await??;
            (cd, self.spawn(OptimizerKind::GradientDescent).await??)
        };

        Ok(Report {
            coordinate_descent,
            gradient_descent,
        })
    }

    /// Starts a single optimizer run on the blocking thread pool.
    fn spawn(&self, kind: OptimizerKind) -> JoinHandle<Result<RunReport>> {
        let dataset = Arc::clone(&self.dataset);
        let theta0 = self.config.init.theta0(dataset.features());
        let device = self.config.device;
        let alpha = self.config.learning_rate;
        let iterations = self.config.iterations;

        task::spawn_blocking(move || run_timed(kind, device, &dataset, theta0, alpha, iterations))
    }
}

/// Waits for both tasks to finish, the first one's error wins if both fail.
async fn join_both<T>(
    first: JoinHandle<Result<T>>,
    second: JoinHandle<Result<T>>,
) -> Result<(T, T)> {
    let (first, second) = tokio::join!(first, second);
    Ok((first??, second??))
}

/// Acquires a device, runs one optimizer on it and measures the call.
///
/// The device is released when this function returns, whatever the outcome.
pub fn run_timed(
    kind: OptimizerKind,
    device: DeviceConfig,
    dataset: &Dataset,
    theta0: Array1<f64>,
    alpha: f64,
    iterations: usize,
) -> Result<RunReport> {
    let executor = Device::acquire(device)?;
    let (x, y) = (dataset.x(), dataset.y());

    let start = Instant::now();
    let result = match kind {
        OptimizerKind::GradientDescent => {
            descent::run_gradient_descent(&executor, theta0.view(), x, y, alpha, iterations)
        }
        OptimizerKind::CoordinateDescent => {
            descent::run_coordinate_descent(&executor, theta0.view(), x, y, alpha, iterations)
        }
    }?;
    let elapsed = start.elapsed();

    let report = RunReport::new(result, elapsed);
    info!(
        optimizer = kind.name(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        final_cost = report.final_cost().unwrap_or(f64::NAN);
        "optimizer finished"
    );

    Ok(report)
}
