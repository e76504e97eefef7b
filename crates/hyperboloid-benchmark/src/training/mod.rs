//! Typed job interface for the external skip-gram trainers.
//!
//! Embeddings are produced by two external binaries: the Minkowski trainer
//! for the hyperboloid and fastText for the Euclidean baseline. A
//! [`TrainingJob`] describes one run; a [`Trainer`] turns it into a vector
//! file on disk or a [`TrainingError`].
//!
//! - `job`: hyperparameters, output naming
//! - `subprocess`: [`SubprocessTrainer`], launching the binaries
//! - `sweep`: the learning-rate × dimension grid

pub mod job;
pub mod subprocess;
pub mod sweep;

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub use job::{format_hyperparameter, Hyperparameters, TrainingJob};
pub use subprocess::SubprocessTrainer;
pub use sweep::{plan_jobs, sweep, SweepFailure, SweepOutcome};

/// Failure of a single training job.
#[derive(Error, Debug)]
pub enum TrainingError {
    /// The trainer binary could not be started.
    #[error("Failed to launch {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trainer exited unsuccessfully.
    #[error("{program:?} exited with {status}")]
    Failed { program: PathBuf, status: ExitStatus },

    /// The trainer exited successfully but the vector file is absent.
    #[error("Trainer finished but {0:?} was not written")]
    MissingOutput(PathBuf),

    /// Output directory could not be prepared.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Job parameters are out of range.
    #[error("Invalid training job: {0}")]
    InvalidJob(String),
}

/// Something that can produce an embedding file from a job.
pub trait Trainer: Send + Sync {
    /// Run `job` to completion and return the path of the written vectors.
    fn train(&self, job: &TrainingJob) -> Result<PathBuf, TrainingError>;
}
