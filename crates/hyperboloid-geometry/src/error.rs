//! Error types for hyperboloid geometry and embedding-table operations.
//!
//! Numerical domain problems inside the Lorentz engine are clamped away rather
//! than reported, so every variant here describes a problem with the *data*
//! handed to the engine: a word that is not in the vocabulary, a vector of the
//! wrong dimension, or a table that cannot be built.

use thiserror::Error;

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error type for embedding-table lookups and search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Word is not part of the table's vocabulary.
    ///
    /// Scorers treat this as a per-item skip signal, never as a fatal error.
    #[error("Word not found in vocabulary: {0}")]
    WordNotFound(String),

    /// Vector dimension does not match the table (or another vector).
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The same word appears twice while building a table.
    #[error("Duplicate word in embedding table: {0}")]
    DuplicateWord(String),

    /// Word list and vector matrix disagree on the number of rows.
    #[error("Row count mismatch: {words} words but {rows} vectors")]
    RowCountMismatch { words: usize, rows: usize },

    /// A table must hold at least one coordinate per vector.
    #[error("Embedding vectors must have at least one coordinate")]
    ZeroDimension,
}

impl GeometryError {
    /// True for errors that scorers recover from by skipping the item.
    pub fn is_lookup_miss(&self) -> bool {
        self.missing_word().is_some()
    }

    /// The out-of-vocabulary word behind a lookup miss.
    pub fn missing_word(&self) -> Option<&str> {
        match self {
            GeometryError::WordNotFound(word) => Some(word),
            _ => None,
        }
    }
}
