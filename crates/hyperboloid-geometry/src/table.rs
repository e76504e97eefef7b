//! Read-only word → vector tables.
//!
//! An [`EmbeddingTable`] stores every vector as one row of a dense
//! `Array2<f64>`, so distance queries run as a single batched product over
//! the whole vocabulary. Tables are built once by a loader and never mutated.

use std::collections::HashMap;
use std::fmt;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};

/// Euclidean norms below this are treated as zero when normalizing.
const NORMALIZE_EPS: f64 = 1e-12;

/// Which model the vectors of a table live in.
///
/// Selects the scoring path used by the evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Points on the Lorentz hyperboloid, timelike coordinate last.
    Hyperbolic,
    /// Ordinary Euclidean vectors (fastText-style).
    Euclidean,
}

impl Geometry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Geometry::Hyperbolic => "hyperbolic",
            Geometry::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocabulary plus a row-major matrix of vectors.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    words: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Array2<f64>,
}

impl EmbeddingTable {
    /// Build a table from a word list and a matrix with one row per word.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::RowCountMismatch`] if the row count differs from the word count
    /// - [`GeometryError::ZeroDimension`] if the matrix has no columns but some rows
    /// - [`GeometryError::DuplicateWord`] on the first repeated word
    pub fn new(words: Vec<String>, vectors: Array2<f64>) -> GeometryResult<Self> {
        if words.len() != vectors.nrows() {
            return Err(GeometryError::RowCountMismatch {
                words: words.len(),
                rows: vectors.nrows(),
            });
        }
        if vectors.ncols() == 0 && !words.is_empty() {
            return Err(GeometryError::ZeroDimension);
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i).is_some() {
                return Err(GeometryError::DuplicateWord(word.clone()));
            }
        }

        debug!(
            words = words.len(),
            dim = vectors.ncols(),
            "Built embedding table"
        );
        Ok(Self {
            words,
            index,
            vectors,
        })
    }

    /// Build a table from `(word, vector)` rows.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DimensionMismatch`] if a row's length differs from the
    /// first row's, plus everything [`EmbeddingTable::new`] reports.
    pub fn from_rows<I>(rows: I) -> GeometryResult<Self>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut words = Vec::new();
        let mut flat = Vec::new();
        let mut dim = None;

        for (word, vector) in rows {
            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(GeometryError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
            words.push(word);
            flat.extend(vector);
        }

        let dim = dim.unwrap_or(0);
        let vectors = Array2::from_shape_vec((words.len(), dim), flat).map_err(|_| {
            GeometryError::RowCountMismatch {
                words: words.len(),
                rows: 0,
            }
        })?;
        Self::new(words, vectors)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of coordinates per vector (ambient dimension for hyperboloid tables).
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    /// Words in row order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn vectors(&self) -> ArrayView2<'_, f64> {
        self.vectors.view()
    }

    /// Row index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Word stored at row `index`.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Vector of `word`, if present.
    pub fn get(&self, word: &str) -> Option<ArrayView1<'_, f64>> {
        self.index_of(word).map(|i| self.vectors.row(i))
    }

    /// Vector of `word`, or [`GeometryError::WordNotFound`].
    pub fn lookup(&self, word: &str) -> GeometryResult<ArrayView1<'_, f64>> {
        self.get(word)
            .ok_or_else(|| GeometryError::WordNotFound(word.to_string()))
    }

    /// Copy of the table with every row scaled to unit Euclidean length.
    ///
    /// Rows with a (near) zero norm are left unscaled.
    pub fn l2_normalized(&self) -> Self {
        let norms: Array1<f64> = self
            .vectors
            .map_axis(Axis(1), |row| row.dot(&row).sqrt())
            .mapv(|n| if n < NORMALIZE_EPS { 1.0 } else { n });
        let vectors = &self.vectors / &norms.insert_axis(Axis(1));

        Self {
            words: self.words.clone(),
            index: self.index.clone(),
            vectors,
        }
    }
}
