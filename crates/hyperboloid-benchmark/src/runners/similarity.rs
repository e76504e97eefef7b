//! Word-similarity scoring.
//!
//! Hyperbolic tables are scored with the Minkowski dot product of the raw
//! hyperboloid points. Euclidean tables are L2-normalized first and scored
//! with the plain dot product, i.e. cosine similarity. The hyperboloid points
//! are never rescaled.
//!
//! Every line of a gold file is one observation: a pair listed twice is
//! scored and ranked twice. Tools that key the gold scores by word pair keep
//! only the last occurrence, so correlations on files with repeated pairs
//! can differ slightly from numbers produced that way.

use std::borrow::Cow;

use hyperboloid_geometry::{minkowski_dot, EmbeddingTable, Geometry};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::datasets::SimilarityDataset;
use crate::metrics::{spearman, weighted_mean, SummaryScore};

/// Spearman correlation of one gold dataset against one embedding table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetCorrelation {
    pub dataset: String,
    /// Pairs in the gold file.
    pub total_size: usize,
    /// Pairs with at least one out-of-vocabulary word.
    pub not_found: usize,
    /// Pairs actually scored.
    pub found: usize,
    /// NaN if fewer than two pairs were found or either ranking is constant.
    pub rho: f64,
}

/// All dataset correlations for one embedding table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEvaluation {
    pub datasets: Vec<DatasetCorrelation>,
    /// Mean of the per-dataset ρ weighted by found pairs.
    pub weighted_rho: f64,
}

impl SummaryScore for SimilarityEvaluation {
    fn summary_score(&self) -> f64 {
        self.weighted_rho
    }
}

/// Scores word pairs against one embedding table.
#[derive(Debug)]
pub struct SimilarityScorer<'a> {
    table: Cow<'a, EmbeddingTable>,
    geometry: Geometry,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(table: &'a EmbeddingTable, geometry: Geometry) -> Self {
        let table = match geometry {
            Geometry::Hyperbolic => Cow::Borrowed(table),
            Geometry::Euclidean => Cow::Owned(table.l2_normalized()),
        };
        Self { table, geometry }
    }

    /// Automatic similarity of two words, `None` if either is unknown.
    pub fn score(&self, word1: &str, word2: &str) -> Option<f64> {
        let u = self.table.get(word1)?;
        let v = self.table.get(word2)?;
        Some(match self.geometry {
            Geometry::Hyperbolic => minkowski_dot(u, v),
            Geometry::Euclidean => u.dot(&v),
        })
    }

    /// Correlate one gold dataset with the automatic scores.
    pub fn correlate(&self, dataset: &SimilarityDataset) -> DatasetCorrelation {
        let mut gold = Vec::with_capacity(dataset.len());
        let mut auto = Vec::with_capacity(dataset.len());

        for pair in &dataset.pairs {
            let word1 = pair.word1.to_lowercase();
            let word2 = pair.word2.to_lowercase();
            if let Some(score) = self.score(&word1, &word2) {
                gold.push(pair.gold);
                auto.push(score);
            }
        }

        let found = gold.len();
        let correlation = DatasetCorrelation {
            dataset: dataset.name.clone(),
            total_size: dataset.len(),
            not_found: dataset.len() - found,
            found,
            rho: spearman(&gold, &auto),
        };

        info!(
            dataset = %correlation.dataset,
            total = correlation.total_size,
            not_found = correlation.not_found,
            rho = correlation.rho,
            "Similarity dataset scored"
        );
        correlation
    }

    /// Correlate every dataset and combine them into one weighted score.
    pub fn evaluate(&self, datasets: &[SimilarityDataset]) -> SimilarityEvaluation {
        let datasets: Vec<DatasetCorrelation> =
            datasets.iter().map(|d| self.correlate(d)).collect();

        let rhos: Vec<f64> = datasets.iter().map(|d| d.rho).collect();
        let weights: Vec<f64> = datasets.iter().map(|d| d.found as f64).collect();

        SimilarityEvaluation {
            weighted_rho: weighted_mean(&rhos, &weights),
            datasets,
        }
    }
}
