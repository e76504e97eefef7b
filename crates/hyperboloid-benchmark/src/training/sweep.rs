//! Learning-rate × dimension training sweep.

use std::path::PathBuf;

use hyperboloid_geometry::Geometry;
use tracing::{info, warn};

use super::job::{Hyperparameters, TrainingJob};
use super::{Trainer, TrainingError};
use crate::config::TrainingConfig;

/// A job that did not produce vectors.
#[derive(Debug)]
pub struct SweepFailure {
    pub job: TrainingJob,
    pub error: TrainingError,
}

/// Files produced by a sweep, in grid order.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub hyperbolic_files: Vec<PathBuf>,
    pub euclidean_files: Vec<PathBuf>,
    pub failures: Vec<SweepFailure>,
}

/// Every job of the grid: learning rates outer, dimensions inner, one
/// hyperbolic then one Euclidean job per cell.
pub fn plan_jobs(config: &TrainingConfig) -> Vec<TrainingJob> {
    let label = config.label();
    let mut jobs = Vec::with_capacity(2 * config.learning_rates.len() * config.dimensions.len());

    for &learning_rate in &config.learning_rates {
        for &dimension in &config.dimensions {
            for geometry in [Geometry::Hyperbolic, Geometry::Euclidean] {
                jobs.push(TrainingJob {
                    geometry,
                    hyperparameters: Hyperparameters::from_config(config, learning_rate, dimension),
                    input_file: config.input_file.clone(),
                    corpus_label: label.clone(),
                    output_dir: config.output_dir.clone(),
                });
            }
        }
    }
    jobs
}

/// Run the whole grid sequentially. A failed job is recorded and the sweep
/// moves on.
pub fn sweep(trainer: &dyn Trainer, config: &TrainingConfig) -> SweepOutcome {
    let jobs = plan_jobs(config);
    info!(jobs = jobs.len(), "Starting training sweep");

    let mut outcome = SweepOutcome::default();
    for job in jobs {
        match trainer.train(&job) {
            Ok(path) => match job.geometry {
                Geometry::Hyperbolic => outcome.hyperbolic_files.push(path),
                Geometry::Euclidean => outcome.euclidean_files.push(path),
            },
            Err(error) => {
                warn!(
                    geometry = %job.geometry,
                    dim = job.hyperparameters.dimension,
                    lr = job.hyperparameters.learning_rate,
                    error = %error,
                    "Training job failed"
                );
                outcome.failures.push(SweepFailure { job, error });
            }
        }
    }

    info!(
        hyperbolic = outcome.hyperbolic_files.len(),
        euclidean = outcome.euclidean_files.len(),
        failed = outcome.failures.len(),
        "Training sweep finished"
    );
    outcome
}
