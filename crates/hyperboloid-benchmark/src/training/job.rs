//! Training jobs and the file names they produce.

use std::ffi::OsString;
use std::path::PathBuf;

use hyperboloid_geometry::Geometry;
use serde::{Deserialize, Serialize};

use super::TrainingError;
use crate::config::TrainingConfig;

/// Hyperparameters of one skip-gram run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Intrinsic dimension. The hyperboloid trainer is given `dimension + 1`.
    pub dimension: usize,
    pub epochs: u32,
    pub learning_rate: f64,
    pub subsample_threshold: f64,
    pub window_size: u32,
    pub min_count: u32,
    pub negatives: u32,
    /// Hyperboloid initialisation spread. Not used by fastText.
    pub init_std_dev: f64,
    /// Hyperboloid step-size cap. Not used by fastText.
    pub max_step_size: f64,
    pub threads: u32,
}

impl Hyperparameters {
    /// Grid cell `(learning_rate, dimension)` with the remaining values taken from `config`.
    pub fn from_config(config: &TrainingConfig, learning_rate: f64, dimension: usize) -> Self {
        Self {
            dimension,
            epochs: config.epochs,
            learning_rate,
            subsample_threshold: config.subsample_threshold,
            window_size: config.window_size,
            min_count: config.min_count,
            negatives: config.negatives,
            init_std_dev: config.init_std_dev,
            max_step_size: config.max_step_size,
            threads: config.threads,
        }
    }
}

/// One training run of one trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingJob {
    pub geometry: Geometry,
    pub hyperparameters: Hyperparameters,
    pub input_file: PathBuf,
    /// Corpus name used in the output file name.
    pub corpus_label: String,
    pub output_dir: PathBuf,
}

impl TrainingJob {
    /// Output file name without extension, e.g.
    /// `vecs-wikipedia-euclidean-dim-20-epochs-3-lr-0.05-t-1e-05-ws-10-minCount-15-neg-10`.
    ///
    /// Hyperbolic names additionally end in `-initStddev-{s}`.
    pub fn output_stem(&self) -> String {
        let h = &self.hyperparameters;
        let mut stem = format!(
            "vecs-{}-{}-dim-{}-epochs-{}-lr-{}-t-{}-ws-{}-minCount-{}-neg-{}",
            self.corpus_label,
            self.geometry,
            h.dimension,
            h.epochs,
            format_hyperparameter(h.learning_rate),
            format_hyperparameter(h.subsample_threshold),
            h.window_size,
            h.min_count,
            h.negatives,
        );
        if self.geometry == Geometry::Hyperbolic {
            stem.push_str("-initStddev-");
            stem.push_str(&format_hyperparameter(h.init_std_dev));
        }
        stem
    }

    /// Value passed to the trainer's `-output` flag.
    pub fn output_prefix(&self) -> PathBuf {
        self.output_dir.join(self.output_stem())
    }

    /// Vector file the trainer writes: `.csv` for the hyperboloid, `.vec` for fastText.
    pub fn output_path(&self) -> PathBuf {
        let extension = match self.geometry {
            Geometry::Hyperbolic => ".csv",
            Geometry::Euclidean => ".vec",
        };
        // The stem contains dots, so `with_extension` would truncate it.
        let mut path = OsString::from(self.output_prefix());
        path.push(extension);
        PathBuf::from(path)
    }

    pub fn validate(&self) -> Result<(), TrainingError> {
        let h = &self.hyperparameters;
        if h.dimension == 0 {
            return Err(TrainingError::InvalidJob("dimension must be greater than 0".into()));
        }
        if h.epochs == 0 || h.threads == 0 {
            return Err(TrainingError::InvalidJob(
                "epochs and threads must be greater than 0".into(),
            ));
        }
        if !(h.learning_rate > 0.0 && h.learning_rate.is_finite()) {
            return Err(TrainingError::InvalidJob(format!(
                "learning rate must be finite and positive, got {}",
                h.learning_rate
            )));
        }
        if self.corpus_label.is_empty() {
            return Err(TrainingError::InvalidJob("corpus label cannot be empty".into()));
        }
        Ok(())
    }
}

/// Format a float the way the trainers' file names spell it.
///
/// Shortest round-trip digits, always with a decimal point or exponent, and a
/// signed two-digit exponent outside `[1e-4, 1e16)`: `1.0`, `0.05`, `1e-05`.
pub fn format_hyperparameter(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => scientific,
    }
}
