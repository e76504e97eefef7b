//! Launches the external trainer binaries.
//!
//! Arguments are passed as a vector to [`Command`]; nothing goes through a
//! shell. Trainer stdout/stderr are inherited so progress stays visible.

use std::path::PathBuf;
use std::process::Command;

use hyperboloid_geometry::Geometry;
use tracing::info;

use super::job::{format_hyperparameter, TrainingJob};
use super::{Trainer, TrainingError};
use crate::config::TrainingConfig;

/// [`Trainer`] backed by the Minkowski and fastText executables.
#[derive(Debug, Clone)]
pub struct SubprocessTrainer {
    pub minkowski_binary: PathBuf,
    pub fasttext_binary: PathBuf,
}

impl SubprocessTrainer {
    pub fn new(minkowski_binary: impl Into<PathBuf>, fasttext_binary: impl Into<PathBuf>) -> Self {
        Self {
            minkowski_binary: minkowski_binary.into(),
            fasttext_binary: fasttext_binary.into(),
        }
    }

    pub fn from_config(config: &TrainingConfig) -> Self {
        Self::new(&config.minkowski_binary, &config.fasttext_binary)
    }

    /// Binary that handles `geometry`.
    pub fn program(&self, geometry: Geometry) -> &PathBuf {
        match geometry {
            Geometry::Hyperbolic => &self.minkowski_binary,
            Geometry::Euclidean => &self.fasttext_binary,
        }
    }

    /// The command that would run `job`, not yet spawned.
    pub fn command(&self, job: &TrainingJob) -> Command {
        let h = &job.hyperparameters;
        let mut cmd = Command::new(self.program(job.geometry));

        match job.geometry {
            Geometry::Hyperbolic => {
                cmd.arg("-input")
                    .arg(&job.input_file)
                    .arg("-output")
                    .arg(job.output_prefix())
                    .args(["-max-step-size", format_hyperparameter(h.max_step_size).as_str()])
                    .args(["-dimension", (h.dimension + 1).to_string().as_str()])
                    .args(["-start-lr", format_hyperparameter(h.learning_rate).as_str()])
                    .args(["-end-lr", "0"])
                    .args(["-epochs", h.epochs.to_string().as_str()])
                    .args(["-init-std-dev", format_hyperparameter(h.init_std_dev).as_str()])
                    .args(["-min-count", h.min_count.to_string().as_str()])
                    .args(["-t", format_hyperparameter(h.subsample_threshold).as_str()])
                    .args(["-window-size", h.window_size.to_string().as_str()])
                    .args(["-number-negatives", h.negatives.to_string().as_str()])
                    .args(["-threads", h.threads.to_string().as_str()]);
            }
            Geometry::Euclidean => {
                cmd.arg("skipgram")
                    .arg("-input")
                    .arg(&job.input_file)
                    .arg("-output")
                    .arg(job.output_prefix())
                    .args(["-dim", h.dimension.to_string().as_str()])
                    .args(["-lr", format_hyperparameter(h.learning_rate).as_str()])
                    .args(["-epoch", h.epochs.to_string().as_str()])
                    .args(["-minCount", h.min_count.to_string().as_str()])
                    .args(["-minn", "0", "-maxn", "0"])
                    .args(["-t", format_hyperparameter(h.subsample_threshold).as_str()])
                    .args(["-ws", h.window_size.to_string().as_str()])
                    .args(["-loss", "ns"])
                    .args(["-neg", h.negatives.to_string().as_str()])
                    .args(["-thread", h.threads.to_string().as_str()]);
            }
        }
        cmd
    }
}

impl Trainer for SubprocessTrainer {
    fn train(&self, job: &TrainingJob) -> Result<PathBuf, TrainingError> {
        job.validate()?;
        std::fs::create_dir_all(&job.output_dir).map_err(|source| TrainingError::Io {
            path: job.output_dir.clone(),
            source,
        })?;

        let program = self.program(job.geometry).clone();
        info!(
            program = %program.display(),
            geometry = %job.geometry,
            dim = job.hyperparameters.dimension,
            lr = job.hyperparameters.learning_rate,
            "Starting training job"
        );

        let status = self
            .command(job)
            .status()
            .map_err(|source| TrainingError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(TrainingError::Failed { program, status });
        }

        let output = job.output_path();
        if !output.is_file() {
            return Err(TrainingError::MissingOutput(output));
        }
        info!(output = %output.display(), "Training job finished");
        Ok(output)
    }
}
