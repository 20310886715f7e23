use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use ndarray::Array1;
use serde::Deserialize;

use crate::{HarnessErr, Result};

/// How the initial parameter vector is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitConfig {
    /// Every parameter starts at `value`.
    Const { value: f64 },
    /// The parameters are given one by one, there must be one per feature.
    Explicit { values: Vec<f64> },
}

impl Default for InitConfig {
    fn default() -> Self {
        Self::Const { value: 1.0 }
    }
}

impl InitConfig {
    /// Builds a fresh initial guess.
    ///
    /// # Arguments
    /// * `features` - The amount of features in the dataset.
    ///
    /// # Returns
    /// A newly allocated parameter vector, never shared with a previous call.
    pub fn theta0(&self, features: usize) -> Array1<f64> {
        match self {
            Self::Const { value } => Array1::from_elem(features, *value),
            Self::Explicit { values } => Array1::from_vec(values.clone()),
        }
    }
}

/// The compute device each optimizer run acquires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceConfig {
    /// Single threaded reference executor.
    Sequential,
    /// A dedicated rayon pool per run, `threads` defaults to one per logical CPU.
    ThreadPool { threads: Option<NonZeroUsize> },
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::ThreadPool { threads: None }
    }
}

/// Everything needed to compare both optimizers over a dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// JSON file with the feature matrix, an array of equally sized arrays.
    pub features: PathBuf,
    /// JSON file with the target vector, an array of numbers.
    pub targets: PathBuf,
    pub learning_rate: f64,
    pub iterations: usize,
    pub init: InitConfig,
    pub device: DeviceConfig,
    /// Whether both optimizers run at the same time or one after the other.
    pub concurrent: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            features: PathBuf::from("./Dataset/features.json"),
            targets: PathBuf::from("./Dataset/output.json"),
            learning_rate: 0.03,
            iterations: 20,
            init: InitConfig::default(),
            device: DeviceConfig::default(),
            concurrent: false,
        }
    }
}

impl RunConfig {
    /// Loads a `RunConfig` from a JSON file, missing fields take their default value.
    ///
    /// # Errors
    /// `HarnessErr::Io` if the file can't be read, `HarnessErr::Json` if it can't be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| HarnessErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| HarnessErr::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the constraints the type system can't express.
    ///
    /// # Errors
    /// `HarnessErr::InvalidConfig` describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() {
            return Err(HarnessErr::InvalidConfig(format!(
                "learning_rate must be finite, got {}",
                self.learning_rate
            )));
        }

        if let InitConfig::Explicit { values } = &self.init {
            if values.is_empty() {
                return Err(HarnessErr::InvalidConfig(
                    "explicit init must have at least one value".into(),
                ));
            }

            if values.iter().any(|v| !v.is_finite()) {
                return Err(HarnessErr::InvalidConfig(
                    "explicit init values must be finite".into(),
                ));
            }
        }

        Ok(())
    }
}
