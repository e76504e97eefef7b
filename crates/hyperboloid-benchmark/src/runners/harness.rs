//! Evaluation harness.
//!
//! Runs one task over every configured embedding file, hyperbolic files first.
//! A file that cannot be loaded or scored is logged and recorded as failed;
//! the remaining files are still evaluated.

use chrono::{DateTime, Utc};
use hyperboloid_geometry::{EmbeddingTable, Geometry};
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{error, info};

use crate::config::EvaluationConfig;
use crate::datasets::{load_similarity_datasets, read_questions, QuestionSet};
use crate::error::BenchResult;
use crate::metrics::{AnalogyAccuracy, SummaryScore};

use super::analogy::AnalogyScorer;
use super::similarity::{SimilarityEvaluation, SimilarityScorer};

/// Benchmark task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Analogy,
    Similarity,
}

impl Task {
    /// Result file name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Task::Analogy => "results_analogy",
            Task::Similarity => "results_similarity",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Analogy => write!(f, "analogy"),
            Task::Similarity => write!(f, "similarity"),
        }
    }
}

/// Outcome of evaluating one embedding file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus<T> {
    Completed(T),
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileEvaluation<T> {
    /// File path as given in the configuration.
    pub identifier: String,
    pub geometry: Geometry,
    pub status: FileStatus<T>,
}

impl<T> FileEvaluation<T> {
    pub fn result(&self) -> Option<&T> {
        match &self.status {
            FileStatus::Completed(result) => Some(result),
            FileStatus::Failed { .. } => None,
        }
    }
}

/// Every file of one task run, in evaluation order.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRun<T> {
    pub task: Task,
    pub started_at: DateTime<Utc>,
    pub files: Vec<FileEvaluation<T>>,
}

impl<T> EvaluationRun<T> {
    pub fn failures(&self) -> impl Iterator<Item = &FileEvaluation<T>> {
        self.files.iter().filter(|f| f.result().is_none())
    }
}

impl<T: SummaryScore> EvaluationRun<T> {
    /// `(identifier, score)` for every completed file.
    pub fn scores(&self) -> Vec<(String, f64)> {
        self.files
            .iter()
            .filter_map(|f| f.result().map(|r| (f.identifier.clone(), r.summary_score())))
            .collect()
    }
}

/// Drives the analogy and similarity tasks over the configured files.
#[derive(Debug)]
pub struct EvaluationHarness {
    config: EvaluationConfig,
    pool: Option<ThreadPool>,
}

impl EvaluationHarness {
    /// Validate `config` and build the worker pool if `threads` is set.
    pub fn new(config: EvaluationConfig) -> BenchResult<Self> {
        config.validate()?;
        let pool = match config.threads {
            Some(n) => Some(ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Analogy accuracy for every file.
    ///
    /// # Errors
    ///
    /// Only when the questions file cannot be read.
    pub fn run_analogy(&self) -> BenchResult<EvaluationRun<AnalogyAccuracy>> {
        let settings = &self.config.analogy;
        let mut questions = read_questions(&settings.questions_file)?;
        if let Some(max) = settings.max_questions {
            questions = questions.sample(max, settings.seed);
            info!(questions = questions.len(), seed = settings.seed, "Sampled analogy questions");
        }

        Ok(self.evaluate_files(Task::Analogy, |table, geometry| {
            self.score_analogy(table, geometry, &questions)
        }))
    }

    /// Similarity correlations for every file.
    ///
    /// # Errors
    ///
    /// Only when a gold dataset cannot be read.
    pub fn run_similarity(&self) -> BenchResult<EvaluationRun<SimilarityEvaluation>> {
        let datasets = load_similarity_datasets(&self.config.similarity.dataset_paths())?;

        Ok(self.evaluate_files(Task::Similarity, |table, geometry| {
            Ok(SimilarityScorer::new(table, geometry).evaluate(&datasets))
        }))
    }

    fn score_analogy(
        &self,
        table: &EmbeddingTable,
        geometry: Geometry,
        questions: &QuestionSet,
    ) -> BenchResult<AnalogyAccuracy> {
        let scorer = AnalogyScorer::new(table, geometry, self.config.analogy.candidates);
        Ok(self.install(|| scorer.evaluate(questions))?)
    }

    fn evaluate_files<T, F>(&self, task: Task, score: F) -> EvaluationRun<T>
    where
        F: Fn(&EmbeddingTable, Geometry) -> BenchResult<T>,
    {
        let started_at = Utc::now();
        let sources = self.config.sources();
        info!(task = %task, files = sources.len(), "Starting evaluation");

        let files = sources
            .into_iter()
            .map(|source| {
                let identifier = source.identifier();
                let status = match source.load().and_then(|t| score(&t, source.geometry)) {
                    Ok(result) => FileStatus::Completed(result),
                    Err(e) => {
                        error!(file = %identifier, error = %e, "Evaluation failed");
                        FileStatus::Failed {
                            error: e.to_string(),
                        }
                    }
                };
                FileEvaluation {
                    identifier,
                    geometry: source.geometry,
                    status,
                }
            })
            .collect();

        EvaluationRun {
            task,
            started_at,
            files,
        }
    }

    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}
