//! Evaluation configuration.
//!
//! Every section has defaults matching the published experiment setup, so a
//! TOML file only needs to name what differs:
//!
//! ```toml
//! hyperbolic_files = ["vecs-wikipedia-hyperbolic-dim-20.csv"]
//! euclidean_files = ["vecs-wikipedia-euclidean-dim-20.vec"]
//! threads = 8
//!
//! [analogy]
//! questions_file = "data/questions-words.txt"
//!
//! [similarity]
//! data_dir = "data/word-sim"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::datasets::EmbeddingSource;
use crate::error::{BenchError, BenchResult};
use hyperboloid_geometry::Geometry;

/// Gold similarity datasets evaluated by default.
pub const DEFAULT_SIMILARITY_DATASETS: &[&str] =
    &["EN-WS-353-ALL.txt", "EN-SIMLEX-999.txt", "EN-MEN-TR-3k.txt"];

/// Learning rates of the default training sweep.
pub const DEFAULT_LEARNING_RATES: &[f64] = &[0.1, 0.05, 0.01, 0.005];

/// Intrinsic dimensions of the default training sweep.
pub const DEFAULT_DIMENSIONS: &[usize] = &[5, 20, 50, 100];

/// Top-level configuration for an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Hyperboloid embedding files (`.csv`, timelike coordinate last).
    pub hyperbolic_files: Vec<PathBuf>,
    /// Euclidean embedding files (fastText `.vec`).
    pub euclidean_files: Vec<PathBuf>,
    /// Directory receiving result files.
    pub output_dir: PathBuf,
    /// Worker threads for question scoring. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    pub analogy: AnalogyConfig,
    pub similarity: SimilarityConfig,
    pub training: TrainingConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            hyperbolic_files: Vec::new(),
            euclidean_files: Vec::new(),
            output_dir: PathBuf::from("."),
            threads: None,
            analogy: AnalogyConfig::default(),
            similarity: SimilarityConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

/// Analogy task settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalogyConfig {
    /// word2vec-format questions file.
    pub questions_file: PathBuf,
    /// Neighbours fetched per hyperbolic query before the query words are
    /// removed. Must exceed 3.
    pub candidates: usize,
    /// Evaluate a seeded random subset of this many questions.
    pub max_questions: Option<usize>,
    /// Seed for `max_questions` sampling.
    pub seed: u64,
}

impl Default for AnalogyConfig {
    fn default() -> Self {
        Self {
            questions_file: PathBuf::from("questions-words.txt"),
            candidates: hyperboloid_geometry::search::DEFAULT_CANDIDATES,
            max_questions: None,
            seed: 42,
        }
    }
}

/// Similarity task settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Directory holding the gold similarity files.
    pub data_dir: PathBuf,
    /// File names inside `data_dir`, evaluated in order.
    pub datasets: Vec<String>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("word-sim"),
            datasets: DEFAULT_SIMILARITY_DATASETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SimilarityConfig {
    /// Full paths of the configured datasets.
    pub fn dataset_paths(&self) -> Vec<PathBuf> {
        self.datasets.iter().map(|d| self.data_dir.join(d)).collect()
    }
}

/// Training sweep settings for the external trainers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainingConfig {
    /// Training corpus.
    pub input_file: PathBuf,
    /// Label used in output file names. Defaults to the corpus file stem.
    pub corpus_label: Option<String>,
    /// Minkowski (hyperboloid) skip-gram binary.
    pub minkowski_binary: PathBuf,
    /// fastText binary.
    pub fasttext_binary: PathBuf,
    /// Directory receiving trained vectors.
    pub output_dir: PathBuf,
    pub epochs: u32,
    /// Frequent-word subsampling threshold (`-t`).
    pub subsample_threshold: f64,
    pub window_size: u32,
    pub min_count: u32,
    pub negatives: u32,
    /// Standard deviation of the hyperboloid initialisation.
    pub init_std_dev: f64,
    pub max_step_size: f64,
    pub threads: u32,
    pub learning_rates: Vec<f64>,
    /// Intrinsic dimensions; the hyperboloid trainer gets `dim + 1`.
    pub dimensions: Vec<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("wikipedia.txt"),
            corpus_label: None,
            minkowski_binary: PathBuf::from("minkowski"),
            fasttext_binary: PathBuf::from("fasttext"),
            output_dir: PathBuf::from("."),
            epochs: 3,
            subsample_threshold: 1e-5,
            window_size: 10,
            min_count: 15,
            negatives: 10,
            init_std_dev: 0.01,
            max_step_size: 1.0,
            threads: 64,
            learning_rates: DEFAULT_LEARNING_RATES.to_vec(),
            dimensions: DEFAULT_DIMENSIONS.to_vec(),
        }
    }
}

impl TrainingConfig {
    /// Label for output file names: explicit label, else the corpus file name
    /// up to its first `.`.
    pub fn label(&self) -> String {
        if let Some(label) = &self.corpus_label {
            return label.clone();
        }
        self.input_file
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .filter(|n| !n.is_empty())
            .unwrap_or("corpus")
            .to_string()
    }

    /// Validate the training section.
    pub fn validate(&self) -> BenchResult<()> {
        if self.epochs == 0 {
            return Err(BenchError::Config(
                "training.epochs must be greater than 0".into(),
            ));
        }
        if self.window_size == 0 {
            return Err(BenchError::Config(
                "training.window_size must be greater than 0".into(),
            ));
        }
        if self.threads == 0 {
            return Err(BenchError::Config(
                "training.threads must be greater than 0".into(),
            ));
        }
        if !(self.subsample_threshold >= 0.0 && self.subsample_threshold.is_finite()) {
            return Err(BenchError::Config(format!(
                "training.subsample_threshold must be finite and non-negative, got {}",
                self.subsample_threshold
            )));
        }
        if !(self.init_std_dev >= 0.0 && self.init_std_dev.is_finite()) {
            return Err(BenchError::Config(format!(
                "training.init_std_dev must be finite and non-negative, got {}",
                self.init_std_dev
            )));
        }
        if !(self.max_step_size > 0.0 && self.max_step_size.is_finite()) {
            return Err(BenchError::Config(format!(
                "training.max_step_size must be finite and positive, got {}",
                self.max_step_size
            )));
        }
        if self.learning_rates.is_empty() || self.dimensions.is_empty() {
            return Err(BenchError::Config(
                "training.learning_rates and training.dimensions cannot be empty".into(),
            ));
        }
        if let Some(lr) = self
            .learning_rates
            .iter()
            .find(|lr| !(**lr > 0.0 && lr.is_finite()))
        {
            return Err(BenchError::Config(format!(
                "training.learning_rates must be finite and positive, got {}",
                lr
            )));
        }
        if self.dimensions.contains(&0) {
            return Err(BenchError::Config(
                "training.dimensions must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl EvaluationConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let config: EvaluationConfig =
            toml::from_str(&content).map_err(|e| BenchError::Toml {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values. The first failing check is reported.
    pub fn validate(&self) -> BenchResult<()> {
        if self.threads == Some(0) {
            return Err(BenchError::Config(
                "threads must be greater than 0 when set".into(),
            ));
        }
        if self.analogy.candidates <= 3 {
            return Err(BenchError::Config(format!(
                "analogy.candidates must be at least 4 (3 query words are excluded), got {}",
                self.analogy.candidates
            )));
        }
        if self.analogy.max_questions == Some(0) {
            return Err(BenchError::Config(
                "analogy.max_questions must be greater than 0 when set".into(),
            ));
        }
        if self.similarity.datasets.is_empty() {
            return Err(BenchError::Config(
                "similarity.datasets cannot be empty".into(),
            ));
        }
        self.training.validate()
    }

    /// Embedding files in evaluation order: hyperbolic first, then Euclidean.
    pub fn sources(&self) -> Vec<EmbeddingSource> {
        self.hyperbolic_files
            .iter()
            .map(|p| EmbeddingSource::new(p.clone(), Geometry::Hyperbolic))
            .chain(
                self.euclidean_files
                    .iter()
                    .map(|p| EmbeddingSource::new(p.clone(), Geometry::Euclidean)),
            )
            .collect()
    }
}
