use std::{fmt, io, path::PathBuf};

use descent::DescentErr;
use tokio::task::JoinError;

/// The harness' result type.
pub type Result<T> = std::result::Result<T, HarnessErr>;

/// All errors that can occur while preparing or running a comparison.
#[derive(Debug)]
pub enum HarnessErr {
    /// A dataset or config file couldn't be read.
    Io { path: PathBuf, source: io::Error },
    /// A dataset or config file isn't valid JSON for its expected shape.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Invalid configuration, caught before running anything.
    InvalidConfig(String),
    /// The numerical core rejected the inputs or failed to acquire its device.
    Descent(DescentErr),
    /// A blocking optimizer task panicked or was cancelled.
    Join(String),
}

impl fmt::Display for HarnessErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid JSON in '{}': {source}", path.display())
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Descent(e) => write!(f, "descent error: {e}"),
            Self::Join(msg) => write!(f, "optimizer task failed: {msg}"),
        }
    }
}

impl std::error::Error for HarnessErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Descent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DescentErr> for HarnessErr {
    fn from(e: DescentErr) -> Self {
        Self::Descent(e)
    }
}

impl From<JoinError> for HarnessErr {
    fn from(e: JoinError) -> Self {
        Self::Join(e.to_string())
    }
}
