//! Gold word-similarity datasets (WS-353, SimLex-999, MEN, ...).
//!
//! One `word1 word2 score` triple per line, tab or space separated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BenchError, BenchResult};

/// A word pair with its human similarity judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityPair {
    pub word1: String,
    pub word2: String,
    pub gold: f64,
}

/// All pairs of one gold file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityDataset {
    /// File name, used as the dataset name in reports.
    pub name: String,
    pub pairs: Vec<SimilarityPair>,
}

impl SimilarityDataset {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Read one gold similarity file.
pub fn read_similarity_dataset(path: &Path) -> BenchResult<SimilarityDataset> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let pairs = parse_similarity_pairs(BufReader::new(file), path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(dataset = %name, pairs = pairs.len(), "Loaded similarity dataset");
    Ok(SimilarityDataset { name, pairs })
}

/// Read every dataset in order; the first failure aborts.
pub fn load_similarity_datasets(paths: &[PathBuf]) -> BenchResult<Vec<SimilarityDataset>> {
    paths.iter().map(|p| read_similarity_dataset(p)).collect()
}

/// Parse `word1 word2 score` lines, lowercased. Blank lines are skipped.
pub fn parse_similarity_pairs<R: BufRead>(
    reader: R,
    path: &Path,
) -> BenchResult<Vec<SimilarityPair>> {
    let mut pairs = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| BenchError::io(path, e))?;
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [word1, word2, score] = fields.as_slice() else {
            return Err(BenchError::parse(
                path,
                line_idx + 1,
                format!("expected \"word1 word2 score\", found {} fields", fields.len()),
            ));
        };
        let gold = score.parse::<f64>().map_err(|_| {
            BenchError::parse(path, line_idx + 1, format!("invalid score {:?}", score))
        })?;

        pairs.push(SimilarityPair {
            word1: word1.to_string(),
            word2: word2.to_string(),
            gold,
        });
    }

    Ok(pairs)
}
