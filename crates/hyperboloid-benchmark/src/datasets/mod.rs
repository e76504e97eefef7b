//! Readers for the benchmark inputs.
//!
//! - `embeddings`: hyperboloid `.csv` and fastText `.vec` vector files
//! - `questions`: word2vec analogy questions
//! - `similarity`: gold word-pair similarity judgments

pub mod embeddings;
pub mod questions;
pub mod similarity;

pub use embeddings::{load_embeddings, read_embeddings, EmbeddingSource};
pub use questions::{parse_questions, read_questions, AnalogyQuestion, QuestionSet};
pub use similarity::{
    load_similarity_datasets, parse_similarity_pairs, read_similarity_dataset, SimilarityDataset,
    SimilarityPair,
};
