use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The storage target could not be read or written.
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing storage does not parse into the expected columns.
    #[error("malformed storage at {}: {reason}", path.display())]
    MalformedStorage { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("generation count must be positive")]
    InvalidCount,

    #[error("no unused student id found after {attempts} attempts")]
    IdentityExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    pub fn unavailable(path: &Path, source: io::Error) -> Self {
        PipelineError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        PipelineError::MalformedStorage {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Splits csv failures into I/O problems and parse problems.
    pub fn from_csv(path: &Path, err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(source) => Self::unavailable(path, source),
                other => Self::malformed(path, format!("{other:?}")),
            }
        } else {
            Self::malformed(path, err.to_string())
        }
    }
}
