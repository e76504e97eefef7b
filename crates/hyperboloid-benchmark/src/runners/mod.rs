//! Task runners.
//!
//! - `analogy`: top-1 analogy accuracy, hyperbolic and 3CosAdd
//! - `similarity`: Spearman correlation against gold similarity datasets
//! - `harness`: runs a task over every configured embedding file

pub mod analogy;
pub mod harness;
pub mod similarity;

pub use analogy::AnalogyScorer;
pub use harness::{EvaluationHarness, EvaluationRun, FileEvaluation, FileStatus, Task};
pub use similarity::{DatasetCorrelation, SimilarityEvaluation, SimilarityScorer};
