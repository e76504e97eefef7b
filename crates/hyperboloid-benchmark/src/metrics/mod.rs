//! Metrics for the analogy and similarity tasks.
//!
//! - **Correlation**: Spearman ρ with average ranks, weighted mean over datasets
//! - **Accuracy**: per-question outcomes and top-1 analogy accuracy

pub mod accuracy;
pub mod correlation;

pub use accuracy::{AnalogyAccuracy, QuestionOutcome, SectionAccuracy, SkipReason};
pub use correlation::{average_ranks, pearson, spearman, weighted_mean};

/// The single number written to the TSV result file for one embedding file.
pub trait SummaryScore {
    fn summary_score(&self) -> f64;
}
