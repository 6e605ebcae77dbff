//! Error types for the benchmark core.
//!
//! The CLI layer wraps these in `anyhow::Error`; library callers get the
//! typed variants so they can tell "failed to measure" apart from "measured".

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the line source, the executors and the reporter.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The worker-count text could not be turned into a worker count.
    ///
    /// Raised before any file is touched.
    #[error("Invalid worker count {value:?}: {reason}")]
    InvalidConfiguration {
        /// The text exactly as received
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The input file could not be opened or failed mid-read.
    #[error("Failed to read lines from {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// At least one worker thread panicked before draining the job queue.
    #[error("Worker thread panicked during parallel execution")]
    WorkerPanicked,
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for caller-input problems, as opposed to environment failures.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, BenchError::InvalidConfiguration { .. })
    }
}

/// Result alias for core operations
pub type BenchResult<T> = std::result::Result<T, BenchError>;
