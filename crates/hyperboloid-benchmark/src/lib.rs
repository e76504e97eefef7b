//! # Hyperboloid Embedding Benchmark
//!
//! Evaluates word embeddings trained on the Lorentz hyperboloid against
//! Euclidean (fastText) embeddings on two standard tasks.
//!
//! ## Tasks
//!
//! | Task | Hyperbolic scoring | Euclidean scoring | Metric |
//! |------|--------------------|-------------------|--------|
//! | Word analogy | parallel transport + geodesic distance | 3CosAdd on unit vectors | top-1 accuracy |
//! | Word similarity | Minkowski dot product | cosine | Spearman ρ |
//!
//! ## Modules
//!
//! - **datasets**: embedding files, analogy questions, gold similarity pairs
//! - **metrics**: Spearman correlation, analogy accuracy bookkeeping
//! - **runners**: per-task scorers and the [`EvaluationHarness`]
//! - **reports**: TSV result files and JSON detail reports
//! - **training**: typed jobs for the external skip-gram trainers
//!
//! ## Usage
//!
//! ```bash
//! # Analogy accuracy for one file of each geometry
//! cargo run -p hyperboloid-benchmark --bin hyperboloid-bench -- analogy \
//!     --hyperbolic vecs-hyperbolic.csv --euclidean vecs-euclidean.vec \
//!     --questions questions-words.txt
//!
//! # Similarity on the default datasets, JSON + TSV output
//! cargo run -p hyperboloid-benchmark --bin hyperboloid-bench -- similarity \
//!     --config eval.toml --format both
//! ```

pub mod config;
pub mod datasets;
pub mod error;
pub mod metrics;
pub mod reports;
pub mod runners;
pub mod training;

pub use config::{AnalogyConfig, EvaluationConfig, SimilarityConfig, TrainingConfig};
pub use datasets::{
    load_embeddings, read_questions, read_similarity_dataset, AnalogyQuestion, EmbeddingSource,
    QuestionSet, SimilarityDataset, SimilarityPair,
};
pub use error::{BenchError, BenchResult};
pub use metrics::{spearman, AnalogyAccuracy, QuestionOutcome, SkipReason, SummaryScore};
pub use reports::{write_report, ReportFormat};
pub use runners::{
    AnalogyScorer, DatasetCorrelation, EvaluationHarness, EvaluationRun, FileEvaluation,
    FileStatus, SimilarityEvaluation, SimilarityScorer, Task,
};
pub use training::{SubprocessTrainer, Trainer, TrainingError, TrainingJob};
