//! Crate error type.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type SchedResult<T> = Result<T, SchedError>;

/// Scheduling errors.
///
/// Every failure is terminal for the invocation that raised it; the
/// computation is deterministic so nothing is retried.
#[derive(Error, Debug)]
pub enum SchedError {
    #[error("time quantum must be greater than 0, got {0}")]
    InvalidTimeQuantum(i64),

    #[error("unknown algorithm: {0} (expected fcfs, sjf, round_robin, or priority)")]
    UnknownAlgorithm(String),

    #[error("process {0} already exists")]
    DuplicatePid(String),

    #[error("process not found: {0}")]
    ProcessNotFound(String),

    #[error("failed to access workload file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("no processes to schedule")]
    EmptyWorkload,

    #[error("schedule length overflows the time range")]
    TimeOverflow,
}

impl SchedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
