use std::{
    error::Error,
    fmt::{self, Display},
};

use rayon::ThreadPoolBuildError;

/// The result type used in the entire descent crate.
pub type Result<T> = std::result::Result<T, DescentErr>;

/// The descent crate's error type.
#[derive(Debug)]
pub enum DescentErr {
    /// Tried to build a matrix out of zero rows.
    EmptyMatrix,

    /// A row of a jagged input doesn't have the same length as the first one.
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// A shape invariant was violated (e.g. `theta` doesn't match the amount of features).
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// The compute device backing an executor couldn't be acquired.
    Device(String),
}

impl Display for DescentErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescentErr::EmptyMatrix => write!(f, "cannot build a matrix from an empty row set"),
            DescentErr::RaggedRow { row, got, expected } => write!(
                f,
                "row {row} has {got} columns but the first row has {expected}"
            ),
            DescentErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            DescentErr::Device(msg) => write!(f, "failed to acquire compute device: {msg}"),
        }
    }
}

impl Error for DescentErr {}

impl From<ThreadPoolBuildError> for DescentErr {
    fn from(value: ThreadPoolBuildError) -> Self {
        Self::Device(value.to_string())
    }
}
