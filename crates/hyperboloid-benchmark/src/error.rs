//! Error types for dataset loading, configuration and reporting.
//!
//! Per-question problems (a word missing from the vocabulary) are NOT errors
//! at this level; scorers record them as skipped outcomes. A [`BenchError`]
//! means a whole file, configuration or report could not be handled.

use std::path::PathBuf;

use hyperboloid_geometry::GeometryError;
use thiserror::Error;

use crate::training::TrainingError;

/// Result type alias for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Error type for the evaluation pipeline.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of an input file is malformed.
    #[error("Parse error in {path:?} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// An input file holds no usable records.
    #[error("No records found in {0:?}")]
    EmptyFile(PathBuf),

    /// Configuration file could not be parsed.
    #[error("Invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Embedding table could not be built or queried.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A trainer job failed.
    #[error(transparent)]
    Training(#[from] TrainingError),

    /// JSON report serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Dedicated worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        BenchError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
