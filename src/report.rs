use std::time::Duration;

use descent::RunResult;
use serde::{Serialize, Serializer};

/// The outcome of one optimizer run plus the wall-clock time the harness measured around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub cost_history: Vec<f64>,
    pub theta: Vec<f64>,
    #[serde(rename = "elapsedMs", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl RunReport {
    /// Creates a new `RunReport`.
    ///
    /// # Arguments
    /// * `result` - The optimizer's result.
    /// * `elapsed` - How long the optimizer call took.
    pub fn new(result: RunResult, elapsed: Duration) -> Self {
        let (theta, cost_history) = result.into_parts();

        Self {
            cost_history,
            theta: theta.to_vec(),
            elapsed,
        }
    }

    /// Returns the last recorded cost, if any iteration was run.
    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}

/// Both runs of a comparison over the same dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "CD")]
    pub coordinate_descent: RunReport,
    #[serde(rename = "GD")]
    pub gradient_descent: RunReport,
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_nanos() as f64 / 1e6)
}
