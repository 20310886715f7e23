use std::{fs, path::Path};

use descent::{DenseMatrix, DescentErr};
use log::info;
use ndarray::{Array1, ArrayView1};
use serde::de::DeserializeOwned;

use crate::{HarnessErr, Result};

/// A feature matrix together with its targets, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: DenseMatrix,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The feature matrix.
    /// * `y` - The targets, one per row of `x`.
    ///
    /// # Returns
    /// A new `Dataset` or a size mismatch error.
    pub fn new(x: DenseMatrix, y: Array1<f64>) -> Result<Self> {
        if y.len() != x.rows() {
            return Err(DescentErr::SizeMismatch {
                what: "targets",
                got: y.len(),
                expected: x.rows(),
            }
            .into());
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &DenseMatrix {
        &self.x
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Returns the amount of features, which is the length of the parameter vector.
    pub fn features(&self) -> usize {
        self.x.cols()
    }
}

/// Loads a dataset from two JSON files.
///
/// # Arguments
/// * `features` - A JSON array of equally sized arrays of numbers, one per observation.
/// * `targets` - A JSON array of numbers, one per observation.
///
/// # Errors
/// Returns a `HarnessErr` if a file can't be read or parsed, if the feature rows are ragged
/// or empty, or if there isn't one target per observation.
pub fn load_dataset<P, Q>(features: P, targets: Q) -> Result<Dataset>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let rows: Vec<Vec<f64>> = read_json(features.as_ref())?;
    let y: Vec<f64> = read_json(targets.as_ref())?;

    let x = DenseMatrix::from_rows(&rows)?;
    info!(
        observations = x.rows(),
        features = x.cols();
        "loaded dataset"
    );

    Dataset::new(x, Array1::from_vec(y))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| HarnessErr::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| HarnessErr::Json {
        path: path.to_path_buf(),
        source,
    })
}
